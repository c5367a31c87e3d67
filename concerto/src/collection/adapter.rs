use super::{Collection, Key, Slots};

/// Normalizes a collection into the engine's iteration model.
///
/// Returns the `(Key, T)` pairs in iteration order together with an empty
/// result container of the matching shape. The position of a pair in the
/// returned vector is its slot in the container.
pub(crate) fn adapt<T, V>(collection: Collection<T>) -> (Vec<(Key, T)>, Slots<V>) {
    match collection {
        Collection::Sequence(items) => {
            let slots = Slots::sequence(items.len());
            let pairs = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (Key::Index(index), item))
                .collect();

            (pairs, slots)
        }

        Collection::Keyed(items) => {
            let keys = items.keys().map(str::to_owned).collect();
            let pairs = items
                .into_iter()
                .map(|(name, item)| (Key::Name(name), item))
                .collect();

            (pairs, Slots::keyed(keys))
        }
    }
}
