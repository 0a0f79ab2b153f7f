use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// One of the three places a value can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Command-line arguments.
    Cli,
    /// The configuration file.
    Cfg,
    /// Environment variables.
    Env,
}

impl Source {
    /// All sources, in the order they are listed in help output.
    pub const ALL: [Source; 3] = [Source::Cli, Source::Cfg, Source::Env];

    /// The token used for this source in a `mode:` annotation.
    pub fn name(self) -> &'static str {
        match self {
            Source::Cli => "cli",
            Source::Cfg => "cfg",
            Source::Env => "env",
        }
    }

    pub fn from_name(token: &str) -> Option<Source> {
        Source::ALL.into_iter().find(|s| s.name() == token)
    }

    fn bit(self) -> u8 {
        match self {
            Source::Cli => 0b100,
            Source::Cfg => 0b010,
            Source::Env => 0b001,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of sources a field may be read from.
///
/// The empty set is the literal encoding of "no `mode` declared" and means
/// every source is eligible. [`Modes::allows`] treats it exactly like
/// [`Modes::ALL`]; the two only differ in how they are displayed in help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modes(u8);

impl Modes {
    pub const UNRESTRICTED: Modes = Modes(0);
    pub const ALL: Modes = Modes(0b111);

    pub fn only(source: Source) -> Modes {
        Modes(source.bit())
    }

    pub fn with(self, source: Source) -> Modes {
        Modes(self.0 | source.bit())
    }

    pub fn is_unrestricted(self) -> bool {
        self.0 == 0
    }

    /// The set of sources actually consulted at lookup time.
    pub fn effective(self) -> Modes {
        if self.is_unrestricted() {
            Modes::ALL
        } else {
            self
        }
    }

    pub fn allows(self, source: Source) -> bool {
        self.effective().0 & source.bit() != 0
    }

    /// True when `self` names no source that `parent` excludes.
    pub fn is_within(self, parent: Modes) -> bool {
        self.effective().0 & !parent.effective().0 == 0
    }

    /// Sources allowed by both sets, or `None` when they share none.
    pub fn intersect(self, other: Modes) -> Option<Modes> {
        match self.effective().0 & other.effective().0 {
            0 => None,
            bits => Some(Modes(bits)),
        }
    }

    /// True when some but not all sources are allowed. Such fields carry a
    /// `(... only)` suffix in help output.
    pub fn is_partial(self) -> bool {
        self.0 != 0 && self != Modes::ALL
    }

    /// Sources named by the literal set, in help order.
    pub fn sources(self) -> impl Iterator<Item = Source> {
        Source::ALL
            .into_iter()
            .filter(move |s| self.0 & s.bit() != 0)
    }
}

impl fmt::Display for Modes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources().map(Source::name).collect();
        f.write_str(&names.join(", "))
    }
}

impl Serialize for Modes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for source in self.sources() {
            seq.serialize_element(source.name())?;
        }
        seq.end()
    }
}

/// Static description of one field of a record, as produced by
/// `#[derive(Record)]` or written by hand.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// The field's identifier, used to build the dotted path.
    pub name: &'static str,
    /// The raw `key:value;...` annotation. `None` excludes the field.
    pub tag: Option<&'static str>,
    pub shape: Shape,
}

/// Whether a field holds a value directly or is itself a record.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Terminal,
    Record(&'static [FieldDef]),
}
