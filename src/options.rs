//! Configuration options for dumping.
//!
//! The output grammar itself is fixed (single line, fixed markers and
//! separators), so the only tunable is the recursion guard:
//!
//! - [`DumpOptions::max_depth`]: how deeply nested a value graph may be
//!   before the dump aborts with
//!   [`Error::DepthLimit`](crate::Error::DepthLimit)
//!
//! ## Examples
//!
//! ```rust
//! use typedump::{to_string_with_options, DumpOptions};
//!
//! let nested = vec![vec![vec![1, 2]]];
//!
//! // Default limit is generous
//! assert!(to_string_with_options(&nested, DumpOptions::new()).is_ok());
//!
//! // A tight limit rejects deep nesting instead of recursing further
//! let options = DumpOptions::new().with_max_depth(2);
//! assert!(to_string_with_options(&nested, options).is_err());
//! ```

/// Default nesting depth limit.
///
/// Dumping recurses once per nesting level, so the limit bounds stack
/// growth for pathological inputs. Cyclic values cannot be detected;
/// the limit is what turns them into an error instead of stack overflow.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for dumping.
///
/// # Examples
///
/// ```rust
/// use typedump::DumpOptions;
///
/// let options = DumpOptions::new().with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug)]
pub struct DumpOptions {
    /// Maximum container/record nesting depth before the dump aborts.
    pub max_depth: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DumpOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedump::{DumpOptions, options::DEFAULT_MAX_DEPTH};
    ///
    /// let options = DumpOptions::new();
    /// assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
