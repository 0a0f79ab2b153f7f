#[cfg(test)]
pub mod test {
    use crate::Record;
    use crate::record::{Field, Slot};
    use crate::types::{FieldDef, Shape};

    /// Three levels deep, with keyless records and mixed mode restrictions.
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct NestedConfig {
        #[config("name:help;mode:cli;default:f;desc:Lorem ipsum")]
        pub help: bool,

        #[config("name:config_file;mode:cli")]
        pub config_file: String,

        #[config("name:prefix;mode:cli;default:;desc:")]
        pub prefix: String,

        pub scratch: u32,

        #[config("name:nested;mode:cli,env")]
        pub nested: NestedOne,

        pub ignored: NestedTwo,
    }

    #[derive(Record, Debug, Default, PartialEq)]
    pub struct NestedOne {
        #[config("name:int")]
        pub int: i64,

        #[config("mode:cli")]
        pub nested_two: NestedTwo,
    }

    #[derive(Record, Debug, Default, PartialEq)]
    pub struct NestedTwo {
        #[config("name:nestedtwo.bool")]
        pub flag: bool,

        #[config("name:string")]
        pub text: String,

        #[config]
        pub level: i8,
    }

    /// A restricted section whose children mostly declare no mode.
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct RestrictedSection {
        #[config("name:db;mode:cfg,env")]
        pub db: DbSection,
    }

    #[derive(Record, Debug, Default, PartialEq)]
    pub struct DbSection {
        #[config("name:url;desc:Connection string")]
        pub url: String,

        #[config("name:pool;mode:env")]
        pub pool: u32,

        #[config("name:timeout;default:30")]
        pub timeout: u64,
    }

    // -- Construction failures ----------------------------------------------

    #[derive(Record, Debug, Default)]
    pub struct NestedWidening {
        #[config("name:nested;mode:cli,env")]
        pub nested: WideningOuter,
    }

    #[derive(Record, Debug, Default)]
    pub struct WideningOuter {
        #[config("name:int")]
        pub int: i64,

        #[config("name:nested;mode:cfg")]
        pub inner: WideningInner,
    }

    #[derive(Record, Debug, Default)]
    pub struct WideningInner {
        #[config("name:bool")]
        pub flag: bool,
    }

    #[derive(Record, Debug, Default)]
    pub struct TopLevelWidening {
        #[config("mode:cli")]
        pub only_cli: WideningLeaf,
    }

    #[derive(Record, Debug, Default)]
    pub struct WideningLeaf {
        #[config("name:nested.err;mode:cfg")]
        pub err: String,
    }

    #[derive(Record, Debug, Default)]
    pub struct BadMode {
        #[config("name:help;mode:ZZZ;default:f;desc:Lorem ipsum")]
        pub help: bool,
    }

    #[derive(Record, Debug, Default)]
    pub struct TwinKeys {
        #[config("name:config_file")]
        pub primary: String,

        #[config("name:config_file")]
        pub secondary: String,
    }

    // -- End-to-end fixture --------------------------------------------------

    #[derive(Record, Debug, Default, PartialEq)]
    pub struct AppConfig {
        #[config("name:config_file;mode:cli,env;desc:Path to a JSON config file")]
        pub config_file: String,

        #[config("name:env_prefix;mode:cli;default:APP_;desc:Environment variable prefix")]
        pub env_prefix: String,

        #[config("name:name;desc:User name")]
        pub name: String,

        #[config("name:age;mode:cfg;desc:User age")]
        pub age: u32,

        #[config("name:verbose;default:no")]
        pub verbose: bool,

        #[config("name:server")]
        pub server: ServerConfig,
    }

    #[derive(Record, Debug, Default, PartialEq)]
    pub struct ServerConfig {
        #[config("name:host;default:localhost;desc:Bind address")]
        pub host: String,

        #[config("name:port;mode:cfg,env")]
        pub port: u16,
    }

    /// One field of every terminal kind, keyed by kind name.
    #[derive(Record, Debug, Default)]
    pub struct KindsConfig {
        #[config("name:bool")]
        pub b: bool,
        #[config("name:i8")]
        pub i8_: i8,
        #[config("name:i16")]
        pub i16_: i16,
        #[config("name:i32")]
        pub i32_: i32,
        #[config("name:i64")]
        pub i64_: i64,
        #[config("name:isize")]
        pub isize_: isize,
        #[config("name:u8")]
        pub u8_: u8,
        #[config("name:u16")]
        pub u16_: u16,
        #[config("name:u32")]
        pub u32_: u32,
        #[config("name:u64")]
        pub u64_: u64,
        #[config("name:usize")]
        pub usize_: usize,
        #[config("name:f32")]
        pub f32_: f32,
        #[config("name:f64")]
        pub f64_: f64,
        #[config("name:string")]
        pub s: String,
        #[config("name:list")]
        pub list: Vec<String>,
    }

    // -- Hand-written schema -------------------------------------------------

    /// Described without the derive, the way a caller registers a type it
    /// does not own.
    #[derive(Debug, Default, PartialEq)]
    pub struct ManualConfig {
        pub verbose: bool,
        pub db: ManualDb,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct ManualDb {
        pub port: u16,
        pub host: String,
    }

    impl Field for ManualConfig {
        const SHAPE: Shape = Shape::Record(&[
            FieldDef {
                name: "verbose",
                tag: Some("desc:Verbose output"),
                shape: <bool as Field>::SHAPE,
            },
            FieldDef {
                name: "db",
                tag: Some(""),
                shape: <ManualDb as Field>::SHAPE,
            },
        ]);

        fn slot(&mut self) -> Slot<'_> {
            Slot::Record(self)
        }
    }

    impl crate::record::Record for ManualConfig {
        fn field_mut(&mut self, name: &str) -> Option<Slot<'_>> {
            match name {
                "verbose" => Some(self.verbose.slot()),
                "db" => Some(self.db.slot()),
                _ => None,
            }
        }

        fn reset(&mut self) {
            *self = Self::default();
        }
    }

    impl Field for ManualDb {
        const SHAPE: Shape = Shape::Record(&[
            FieldDef {
                name: "port",
                tag: Some("name:port"),
                shape: <u16 as Field>::SHAPE,
            },
            FieldDef {
                name: "host",
                tag: None,
                shape: <String as Field>::SHAPE,
            },
        ]);

        fn slot(&mut self) -> Slot<'_> {
            Slot::Record(self)
        }
    }

    impl crate::record::Record for ManualDb {
        fn field_mut(&mut self, name: &str) -> Option<Slot<'_>> {
            match name {
                "port" => Some(self.port.slot()),
                "host" => Some(self.host.slot()),
                _ => None,
            }
        }

        fn reset(&mut self) {
            *self = Self::default();
        }
    }
}
