use std::convert::Infallible;

/// Builds a value in place from an argument bundle.
///
/// `Args` is whatever one constructor of the implementing type accepts:
///   - a single owned value
///   - a shared or exclusive reference
///   - a tuple mixing owned values and references
///
/// A type declares one impl per accepted bundle shape. Each bundle element
/// keeps the ownership category the caller gave it, so nothing is cloned on
/// the way to the constructor.
pub trait Construct<Args>: Sized {
    fn construct(args: Args) -> Self;
}

impl<T> Construct<T> for T {
    fn construct(value: T) -> T {
        value
    }
}

/// Fallible variant of [`Construct`] for constructors that validate their
/// arguments. `OptionalBox::try_of_emplaced` hands the error back unchanged.
pub trait TryConstruct<Args>: Sized {
    type Error;

    fn try_construct(args: Args) -> Result<Self, Self::Error>;
}

impl<T: Construct<A>, A> TryConstruct<A> for T {
    type Error = Infallible;

    fn try_construct(args: A) -> Result<Self, Self::Error> {
        Ok(T::construct(args))
    }
}
