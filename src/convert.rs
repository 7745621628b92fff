use crate::OptionalBox;

impl<T> From<OptionalBox<T>> for Option<T> {
    fn from(value: OptionalBox<T>) -> Self {
        value.into_option()
    }
}
