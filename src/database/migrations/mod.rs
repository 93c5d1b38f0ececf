use sea_orm_migration::prelude::*;

mod m001_create_accounts;
mod m002_create_missions;
mod m003_create_social;
mod m004_create_battleground;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m001_create_accounts::Migration),
            Box::new(m002_create_missions::Migration),
            Box::new(m003_create_social::Migration),
            Box::new(m004_create_battleground::Migration),
        ]
    }
}
