//! Helpers applying sparse update inputs to an `ActiveModel`.
//!
//! Non-nullable fields arrive as `Option<T>` and nullable ones as
//! `MaybeUndefined<T>`; an absent field leaves the column untouched.

use async_graphql::MaybeUndefined;
use sea_orm::{ActiveValue, Value};

pub fn patch<T>(field: &mut ActiveValue<T>, value: Option<T>)
where
    T: Into<Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(value);
    }
}

pub fn patch_nullable<T>(field: &mut ActiveValue<Option<T>>, value: MaybeUndefined<T>)
where
    Option<T>: Into<Value>,
{
    match value {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *field = ActiveValue::Set(None),
        MaybeUndefined::Value(value) => *field = ActiveValue::Set(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_leave_field_untouched() {
        let mut name = ActiveValue::Unchanged("Falcons".to_string());
        patch(&mut name, None);
        assert_eq!(name, ActiveValue::Unchanged("Falcons".to_string()));

        let mut avatar = ActiveValue::Unchanged(Some("a.png".to_string()));
        patch_nullable(&mut avatar, MaybeUndefined::Undefined);
        assert_eq!(avatar, ActiveValue::Unchanged(Some("a.png".to_string())));
    }

    #[test]
    fn test_explicit_null_clears_nullable_field() {
        let mut avatar = ActiveValue::Unchanged(Some("a.png".to_string()));
        patch_nullable(&mut avatar, MaybeUndefined::Null);
        assert_eq!(avatar, ActiveValue::Set(None));
    }

    #[test]
    fn test_present_values_are_set() {
        let mut points = ActiveValue::Unchanged(0.0);
        patch(&mut points, Some(42.5));
        assert_eq!(points, ActiveValue::Set(42.5));

        let mut avatar: ActiveValue<Option<String>> = ActiveValue::NotSet;
        patch_nullable(&mut avatar, MaybeUndefined::Value("b.png".to_string()));
        assert_eq!(avatar, ActiveValue::Set(Some("b.png".to_string())));
    }
}
