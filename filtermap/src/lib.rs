use log::trace;

pub mod pipes;
mod sequence;

pub use sequence::Sequence;

/// Returns the elements of `items` for which `predicate` holds, in their original order.
///
/// The predicate is called exactly once per element, front to back. A panic inside
/// the predicate is not caught.
pub fn filter<T: Clone, P: Fn(&T) -> bool>(items: &[T], predicate: P) -> Vec<T> {
    let mut result = Vec::new();
    for item in items {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    trace!("filter kept {} of {} elements", result.len(), items.len());
    result
}

/// Returns `transform` applied to every element of `items`, in order.
///
/// The output always has the same length as the input.
pub fn map<T, U, M: Fn(&T) -> U>(items: &[T], transform: M) -> Vec<U> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(transform(item));
    }
    trace!("map transformed {} elements", result.len());
    result
}

/// Like [`filter`], for predicates that can fail.
///
/// Stops at the first `Err` and returns it as is; later elements are not visited.
pub fn try_filter<T: Clone, E, P: Fn(&T) -> Result<bool, E>>(
    items: &[T],
    predicate: P,
) -> Result<Vec<T>, E> {
    let mut result = Vec::new();
    for item in items {
        if predicate(item)? {
            result.push(item.clone());
        }
    }
    trace!("try_filter kept {} of {} elements", result.len(), items.len());
    Ok(result)
}

/// Like [`map`], for transforms that can fail.
pub fn try_map<T, U, E, M: Fn(&T) -> Result<U, E>>(items: &[T], transform: M) -> Result<Vec<U>, E> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(transform(item)?);
    }
    trace!("try_map transformed {} elements", result.len());
    Ok(result)
}
