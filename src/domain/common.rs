use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity label.
pub trait Labelled {
    fn label(&self) -> &str;
}

/// Exposes the monetary amount carried by an entity.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every item, yielding `0.0` for an empty iterator.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
