use clap::ValueEnum;

/// How property node ids are derived from their interface id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum IdScheme {
    /// `<interfaceId><index>` by text concatenation; `"1"` + `2` gives `"12"`.
    /// Ambiguous, but matches graphs already consumed downstream.
    #[default]
    Legacy,
    /// `<interfaceId>.<index>`; never collides with an interface id.
    Composite,
}

impl IdScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            IdScheme::Legacy => "legacy",
            IdScheme::Composite => "composite",
        }
    }

    pub fn property_id(self, interface_id: &str, index: usize) -> String {
        match self {
            IdScheme::Legacy => format!("{interface_id}{index}"),
            IdScheme::Composite => format!("{interface_id}.{index}"),
        }
    }
}

/// Sequential interface id counter, owned by one conversion run.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: usize,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_interface_id(&mut self) -> String {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}
