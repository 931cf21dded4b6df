use std::num::NonZeroUsize;

use relay_wire::messages::DEFAULT_READ_BUFFER;

fn default_read() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_READ_BUFFER).unwrap_or(NonZeroUsize::MIN)
}

entity! {
    struct BufferingConfig {
        /// Bytes taken by a single receive. Upper bound for one
        /// command or one response.
        #[serde(default = "default_read")]
        read: NonZeroUsize,
    }

    #[derive(Default)]
    struct LimitsConfig {
        /// Connections served at once per listener. Unbounded when
        /// not set.
        max_connections: Option<NonZeroUsize>,
    }
}

impl Default for BufferingConfig {
    fn default() -> Self {
        Self {
            read: default_read(),
        }
    }
}
