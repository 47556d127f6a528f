//! Symbol Table
//!
//! The intermediate representation of one component. It is an immutable
//! value: every `with_*` call returns an updated copy and leaves the
//! receiver untouched, so the classifier passes compose as a plain fold.

use serde::Serialize;

use crate::structures::{Component, Computed, DataField, Emit, Hook, Method, Mixin, Prop, Ref, Watch};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    component: Option<Component>,
    mixins: Vec<Mixin>,
    props: Vec<Prop>,
    data: Vec<DataField>,
    refs: Vec<Ref>,
    hooks: Vec<Hook>,
    methods: Vec<Method>,
    getters: Vec<Computed>,
    emits: Vec<Emit>,
    watch: Vec<Watch>,
}

macro_rules! with_item {
    ($fn_name:ident, $field:ident, $ty:ty) => {
        pub fn $fn_name(&self, item: $ty) -> SymbolTable {
            let mut table = self.clone();
            table.$field.push(item);
            table
        }
    };
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(&self, component: Component) -> SymbolTable {
        SymbolTable {
            component: Some(component),
            ..self.clone()
        }
    }

    pub fn with_mixins(&self, mixins: impl IntoIterator<Item = Mixin>) -> SymbolTable {
        let mut table = self.clone();
        table.mixins.extend(mixins);
        table
    }

    with_item!(with_prop, props, Prop);
    with_item!(with_data, data, DataField);
    with_item!(with_ref, refs, Ref);
    with_item!(with_hook, hooks, Hook);
    with_item!(with_method, methods, Method);
    with_item!(with_getter, getters, Computed);
    with_item!(with_emit, emits, Emit);
    with_item!(with_watch, watch, Watch);

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }

    pub fn mixins(&self) -> &[Mixin] {
        &self.mixins
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn data(&self) -> &[DataField] {
        &self.data
    }

    pub fn refs(&self) -> &[Ref] {
        &self.refs
    }

    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn getters(&self) -> &[Computed] {
        &self.getters
    }

    pub fn emits(&self) -> &[Emit] {
        &self.emits
    }

    pub fn watch(&self) -> &[Watch] {
        &self.watch
    }

    /// A table is empty until a component header has been classified,
    /// whatever else it holds.
    pub fn is_empty(&self) -> bool {
        self.component.is_none()
    }

    pub fn has_mixins(&self) -> bool {
        !self.mixins.is_empty()
    }

    pub fn has_props(&self) -> bool {
        !self.props.is_empty()
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn has_hooks(&self) -> bool {
        !self.hooks.is_empty()
    }

    pub fn has_watch(&self) -> bool {
        !self.watch.is_empty()
    }

    pub fn has_computed(&self) -> bool {
        !self.getters.is_empty() || !self.refs.is_empty()
    }

    /// Plain methods, emit invocations and watch handlers all land in `methods`.
    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty() || !self.emits.is_empty() || !self.watch.is_empty()
    }

    pub fn has_emits(&self) -> bool {
        !self.emits.is_empty()
    }

    pub fn dump(&self) {
        fn names<'t, T>(items: &'t [T], name: impl Fn(&'t T) -> &'t str) -> Vec<&'t str> {
            items.iter().map(name).collect()
        }

        tracing::debug!(
            component = ?self.component.as_ref().map(|c| c.name.as_str()),
            imported_components = ?self.component.as_ref().map(|c| &c.imported_components),
            "symbol table"
        );
        tracing::debug!(mixins = ?names(&self.mixins, |m| m.name.as_str()));
        tracing::debug!(data = ?names(&self.data, |d| d.name.as_str()));
        tracing::debug!(hooks = ?names(&self.hooks, |h| h.name.as_str()));
        tracing::debug!(refs = ?names(&self.refs, |r| r.name.as_str()));
        tracing::debug!(props = ?names(&self.props, |p| p.name.as_str()));
        tracing::debug!(emits = ?names(&self.emits, |e| e.name.as_str()));
        tracing::debug!(watch = ?names(&self.watch, |w| w.name.as_str()));
        tracing::debug!(methods = ?names(&self.methods, |m| m.name.as_str()));
        tracing::debug!(getters = ?names(&self.getters, |g| g.name.as_str()));
    }
}
