//! Helper module with the options for configuring a [`Tokenizer`](crate::Tokenizer).
//!
//!
//! # Example
//!
//! ```
//! # use vtscan::opt::Options;
//! let options = Options::builder()
//!     .pathological_size(1024)
//!     .build();
//!
//! assert_eq!(options.pathological_size(), 1024);
//! ```

#[derive(Clone, Debug)]
struct OptionData {
    initial_buffer_size: usize,
    pathological_size: usize,
}

impl OptionData {
    const fn new() -> Self {
        Self {
            initial_buffer_size: 256,
            pathological_size: 4_096,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the initial capacity of the tokenizer's internal byte buffer.
    ///
    /// The buffer grows past this size whenever a partial sequence
    /// outstrips it; this only sizes the initial allocation.
    pub fn initial_buffer_size(&mut self, size: usize) -> &mut Self {
        self.0.initial_buffer_size = size;
        self
    }

    /// Set the maximum length an in-progress escape sequence may reach
    /// before the tokenizer aborts it as [`ErrorKind::PathologicalSequence`](crate::err::ErrorKind::PathologicalSequence).
    ///
    /// This guards against unbounded memory growth from a terminal (or
    /// attacker) that never terminates a CSI/OSC/SS3 sequence; it does not
    /// change how ordinary, short-lived partial sequences are buffered.
    pub fn pathological_size(&mut self, size: usize) -> &mut Self {
        self.0.pathological_size = size;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object configuring a [`Tokenizer`](crate::Tokenizer).
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the initial capacity of the tokenizer's internal byte buffer.
    pub fn initial_buffer_size(&self) -> usize {
        self.0.initial_buffer_size
    }

    /// Get the maximum length an in-progress escape sequence may reach.
    pub fn pathological_size(&self) -> usize {
        self.0.pathological_size
    }
}
