//! Event handlers that accept none, some or all of an event's arguments.
//!
//! Widgets report events as a value plus a reference to themselves. A handler
//! picks how much of that it wants when it is registered.

use std::fmt::{self, Debug};
use thiserror::Error;

/// Handler construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("handlers take 0, 1 or 2 arguments, not {arity}")]
    UnsupportedArity { arity: usize },
}

/// Arguments delivered to a handler built with [`Handler::from_arity`].
#[derive(Debug)]
pub enum Args<'a, T, W: ?Sized> {
    None,
    Value(T),
    ValueAndSource(T, &'a W),
}

impl<T, W: ?Sized> Args<'_, T, W> {
    /// The event value, when the handler asked for it.
    pub fn value(&self) -> Option<&T> {
        match self {
            Args::None => None,
            Args::Value(value) | Args::ValueAndSource(value, _) => Some(value),
        }
    }

    pub fn source(&self) -> Option<&W> {
        match self {
            Args::ValueAndSource(_, source) => Some(source),
            _ => None,
        }
    }
}

/// An event handler for events carrying a `T` and raised by a `W`.
pub enum Handler<T, W: ?Sized> {
    /// Called with no arguments.
    Bare(Box<dyn FnMut()>),
    /// Called with the event value.
    Value(Box<dyn FnMut(T)>),
    /// Called with the event value and the widget that raised it.
    WithSource(Box<dyn FnMut(T, &W)>),
}

impl<T, W: ?Sized> Debug for Handler<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.arity()).finish()
    }
}

impl<T, W: ?Sized> Handler<T, W> {
    pub fn bare<F>(function: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self::Bare(Box::new(function))
    }

    pub fn value<F>(function: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self::Value(Box::new(function))
    }

    pub fn with_source<F>(function: F) -> Self
    where
        F: FnMut(T, &W) + 'static,
    {
        Self::WithSource(Box::new(function))
    }

    /// Number of arguments the handler receives.
    pub fn arity(&self) -> usize {
        match self {
            Handler::Bare(_) => 0,
            Handler::Value(_) => 1,
            Handler::WithSource(_) => 2,
        }
    }

    /// Invoke with as many arguments as the handler takes.
    pub fn invoke(&mut self, value: T, source: &W) {
        match self {
            Handler::Bare(f) => f(),
            Handler::Value(f) => f(value),
            Handler::WithSource(f) => f(value, source),
        }
    }
}

impl<T: 'static, W: ?Sized + 'static> Handler<T, W> {
    /// Build a handler whose argument count is only known at runtime.
    ///
    /// `function` receives [`Args`] shaped by `arity`.
    pub fn from_arity<F>(arity: usize, mut function: F) -> Result<Self, DispatchError>
    where
        F: FnMut(Args<'_, T, W>) + 'static,
    {
        let handler = match arity {
            0 => Self::Bare(Box::new(move || function(Args::None))),
            1 => Self::Value(Box::new(move |value: T| function(Args::Value(value)))),
            2 => Self::WithSource(Box::new(move |value: T, source: &W| {
                function(Args::ValueAndSource(value, source))
            })),
            arity => return Err(DispatchError::UnsupportedArity { arity }),
        };
        Ok(handler)
    }
}

/// Invoke `handler` if there is one. Returns whether anything ran.
pub fn dispatch<T, W: ?Sized>(handler: Option<&mut Handler<T, W>>, value: T, source: &W) -> bool {
    match handler {
        Some(handler) => {
            handler.invoke(value, source);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    struct Source(&'static str);

    #[test]
    fn test_bare_handler_gets_nothing() {
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        let mut handler: Handler<i32, Source> = Handler::bare(move || *seen.borrow_mut() += 1);
        handler.invoke(7, &Source("a"));
        handler.invoke(8, &Source("a"));
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(handler.arity(), 0);
    }

    #[test]
    fn test_value_handler() {
        let values = Rc::new(RefCell::new(Vec::new()));
        let seen = values.clone();
        let mut handler: Handler<i32, Source> = Handler::value(move |v| seen.borrow_mut().push(v));
        handler.invoke(3, &Source("a"));
        assert_eq!(*values.borrow(), vec![3]);
    }

    #[test]
    fn test_source_handler_gets_value_and_widget() {
        let got = Rc::new(RefCell::new(None));
        let seen = got.clone();
        let mut handler: Handler<i32, Source> =
            Handler::with_source(move |v, source: &Source| *seen.borrow_mut() = Some((v, source.0)));
        handler.invoke(42, &Source("slider"));
        assert_eq!(*got.borrow(), Some((42, "slider")));
    }

    #[test]
    fn test_from_arity_shapes_args() {
        let got = Rc::new(RefCell::new(Vec::new()));
        for arity in 0..=2 {
            let seen = got.clone();
            let mut handler = Handler::<i32, Source>::from_arity(arity, move |args| {
                seen.borrow_mut()
                    .push((args.value().copied(), args.source().map(|s| s.0)));
            })
            .unwrap();
            assert_eq!(handler.arity(), arity);
            handler.invoke(5, &Source("w"));
        }
        assert_eq!(
            *got.borrow(),
            vec![(None, None), (Some(5), None), (Some(5), Some("w"))]
        );
    }

    #[test]
    fn test_unsupported_arity() {
        let err = Handler::<i32, Source>::from_arity(3, |_| {}).unwrap_err();
        assert_eq!(err, DispatchError::UnsupportedArity { arity: 3 });
        assert_eq!(err.to_string(), "handlers take 0, 1 or 2 arguments, not 3");
    }

    #[test]
    fn test_dispatch_without_handler() {
        assert!(!dispatch::<i32, Source>(None, 1, &Source("a")));
        let mut handler: Handler<i32, Source> = Handler::bare(|| {});
        assert!(dispatch(Some(&mut handler), 1, &Source("a")));
    }
}
