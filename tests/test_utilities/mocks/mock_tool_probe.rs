use pyprov::prelude::*;

/// Mock NativeToolProbe for testing
pub struct MockToolProbe {
    pub available: bool,
}

impl MockToolProbe {
    pub fn available() -> Self {
        Self { available: true }
    }

    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl NativeToolProbe for MockToolProbe {
    fn is_available(&self) -> bool {
        self.available
    }
}
