//! Weft Value - runtime values for the Weft render runtime.
//!
//! # Heap Enforcement Architecture
//!
//! This crate enforces that all heap allocations go through factory methods
//! on [`Value`]. The [`Heap<T>`] wrapper type has a crate-private
//! constructor, so external code cannot create heap values directly.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = Value::string("hello");            // OK
//! let list = Value::list(vec![]);            // OK
//! let dict = Value::dict(Dict::new());       // OK
//! ```
//!
//! ## Prevented (Won't Compile)
//!
//! ```text
//! let s = Value::Str(Heap::new(...));        // ERROR: Heap::new is pub(crate)
//! let s = Value::Str(Rc::new(...));          // ERROR: expected Heap, got Rc
//! ```
//!
//! # Thread Safety
//!
//! All heap types use `Rc` internally: the render runtime is synchronous and
//! single-threaded, so values never cross threads and reference counting
//! stays non-atomic.

mod dict;
pub mod errors;
mod heap;
mod value;

pub use dict::Dict;
pub use errors::{read_only_reference, RenderError, RenderErrorKind, RenderResult};
pub use heap::Heap;
pub use value::Value;
