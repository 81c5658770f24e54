//! Map/filter chains applied to one value at a time.
//!
//! A chain is an ordered sequence of steps. Each step is either a filter
//! (`Fn(&T) -> bool`, keep the value if true) or a mapper
//! (`Fn(&T, &mut U) -> bool`, compute a new value into a scratch cell and keep
//! it if true). Chains built out of other chains are flattened, so the step
//! count and the application order are the same however the pieces were
//! grouped.
//!
//! # Example
//!
//! ```rust
//! use downstream::chain::*;
//!
//! let mut evens_as_text = chain()
//!     .filter(|n: &i32| n % 2 == 0)
//!     .map(|n: &i32, out: &mut String| {
//!         *out = n.to_string();
//!         true
//!     });
//!
//! let kept: Vec<String> = [1, 2, 4]
//!     .iter()
//!     .filter_map(|n| evens_as_text.map_filter_owned(n))
//!     .collect();
//! assert_eq!(kept, vec!["2", "4"]);
//! ```
//!
//! # Scratch cells
//!
//! A mapper reuses one scratch cell for every value, so the reference
//! returned by [`MapFilterer::map_filter`] is only valid until the next call.
//! The borrow checker enforces this. Cloning a chain gives every mapper in
//! the clone its own scratch cell.

mod step;
mod then;
mod trait_def;

pub use step::{chain, filter, mapper, Filter, Identity, Mapper};
pub use then::{ChainExt, Concat, Then};
pub use trait_def::{Chain, MapFilterer};
