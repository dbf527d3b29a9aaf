//! Collections shared by the puzzle solutions.
//!
//! [`Deque`] is a double-ended queue built from a doubly linked chain of
//! [`BLOCK_LEN`]-slot blocks, optionally bounded in length. [`Set`] is a hash set
//! with free-standing set algebra ([`set::union`], [`set::intersection`], ...).
//!
//! ```
//! use blockdeque::Deque;
//!
//! let mut d = Deque::with_max_len(2);
//! d.push_back(b'a').unwrap();
//! d.push_back(b'b').unwrap();
//! assert!(d.push_front(b'c').is_err());
//! assert_eq!(d.capacity(), 64);
//! assert_eq!(d.pop_back(), Some(b'b'));
//! assert_eq!(d.pop_back(), Some(b'a'));
//! assert_eq!(d.pop_back(), None);
//! ```

mod deque;
mod error;
mod iter;
pub mod set;

pub use deque::{Deque, BLOCK_LEN};
pub use error::CapacityError;
pub use iter::{IntoIter, Iter};
pub use set::Set;
