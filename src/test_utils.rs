//! Helpers shared by unit tests.

/// Build a row of owned cells from anything printable.
macro_rules! cells {
    ( $($cell:expr),* $(,)? ) => {
        vec![ $( ::std::string::ToString::to_string(&$cell) ),* ]
    };
}

pub(crate) use cells;
