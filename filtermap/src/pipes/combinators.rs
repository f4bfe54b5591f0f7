use crate::pipes::Pipe;

pub fn map<'a, T: 'a, U: 'a, M: Fn(T) -> U + 'a>(mapper: M, next: Pipe<'a, U>) -> Pipe<'a, T> {
    Pipe::new(move |t| next.push(mapper(t)))
}

pub fn filter<'a, T: 'a, F: Fn(&T) -> bool + 'a>(filter: F, next: Pipe<'a, T>) -> Pipe<'a, T> {
    Pipe::new(move |t| {
        if filter(&t) {
            next.push(t);
        }
    })
}

pub fn filter_map<'a, T: 'a, U: 'a, F: Fn(T) -> Option<U> + 'a>(
    f: F,
    next: Pipe<'a, U>,
) -> Pipe<'a, T> {
    Pipe::new(move |t| match f(t) {
        None => (),
        Some(u) => next.push(u),
    })
}
