//! Pipeline configuration.

/// Options threaded through every pass.
///
/// Built with consuming setters:
///
/// ```
/// use typebind_compiler::Config;
///
/// let config = Config::new()
///     .build_index(true)
///     .method_whitelist(["com\\.acme\\..*\\.add"]);
/// assert!(config.builds_index());
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// Emit `index.d.ts` referencing every partition.
    pub(crate) build_index: bool,
    /// Render getters without a setter as `readonly` properties.
    pub(crate) emit_read_only: bool,
    /// Member names never emitted.
    pub(crate) excluded_methods: Vec<String>,
    /// Render accessors as `get`/`set` properties in class form.
    pub(crate) use_getters_and_setters: bool,
    /// One output unit per module instead of per package prefix.
    pub(crate) group_by_module: bool,
    /// Inline ancestors instead of copying missing overloads.
    pub(crate) flatten_types: bool,
    /// Copy ancestor docs onto undocumented overriding methods.
    pub(crate) force_parent_javadocs: bool,
    /// Patterns matched against `"<type>.<method>"`.
    pub(crate) method_whitelist: Vec<String>,
    /// Restrict output to these types and everything they reach.
    pub(crate) root_types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_index: false,
            emit_read_only: false,
            excluded_methods: Vec::new(),
            use_getters_and_setters: true,
            group_by_module: false,
            flatten_types: false,
            force_parent_javadocs: false,
            method_whitelist: Vec::new(),
            root_types: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the index unit.
    pub fn build_index(mut self, value: bool) -> Self {
        self.build_index = value;
        self
    }

    /// Set whether setter-less getters render as `readonly` properties.
    pub fn emit_read_only(mut self, value: bool) -> Self {
        self.emit_read_only = value;
        self
    }

    /// Set the member names to leave out of every declaration.
    pub fn excluded_methods<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_methods = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether accessors render as properties.
    pub fn use_getters_and_setters(mut self, value: bool) -> Self {
        self.use_getters_and_setters = value;
        self
    }

    /// Set whether every module gets its own output unit.
    pub fn group_by_module(mut self, value: bool) -> Self {
        self.group_by_module = value;
        self
    }

    /// Set whether ancestors are inlined into each type.
    pub fn flatten_types(mut self, value: bool) -> Self {
        self.flatten_types = value;
        self
    }

    /// Set whether ancestor docs are forced onto undocumented overrides.
    pub fn force_parent_javadocs(mut self, value: bool) -> Self {
        self.force_parent_javadocs = value;
        self
    }

    /// Set the method whitelist patterns. Compiled by [`Pipeline::new`](crate::Pipeline::new).
    pub fn method_whitelist<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.method_whitelist = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the root types. Empty means every input type.
    pub fn root_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_types = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn builds_index(&self) -> bool {
        self.build_index
    }

    pub fn uses_getters_and_setters(&self) -> bool {
        self.use_getters_and_setters
    }
}
