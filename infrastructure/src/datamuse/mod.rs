//! **Datamuse** word source adapter
//!
//! Implements the application's [`WordSource`](lemur_application::WordSource)
//! port against <https://www.datamuse.com/api/>, a free word-lookup API that
//! needs no key.
//!
//! | Query parameter | Value | Meaning |
//! |-----------------|-------|---------|
//! | `max` | `1..=1000` | number of candidate words |
//! | `md` | `p` | include part-of-speech tags |
//! | `sp` | `<LETTER>*` | spelled-like pattern: words starting with the letter |

mod config;
mod source;

pub use config::DatamuseConfig;
pub use source::DatamuseWordSource;
