//! Small comparator-driven helpers that live next to `trellis` but share no state with it.

pub mod list;
pub mod primes;
pub mod search;
pub mod sort;

pub use list::DoublyLinkedList;
pub use primes::{is_prime, sieve_of_eratosthenes};
pub use search::binary_search;
pub use sort::merge_sort;
