//! Classifier Pipeline
//!
//! An ordered list of independent passes. Each pass looks at one node shape
//! and either returns the table it was given (`Cow::Borrowed`, the same
//! reference) or an updated copy. Patterns are mutually exclusive, so a
//! node is claimed by at most one pass.

use std::borrow::Cow;

use oxc_ast::ast::{Class, Expression, MethodDefinitionKind};

use crate::ast_util::{callee_name, decorator_call, decorator_names, property_key_name};
use crate::dialect::{Dialect, LifecycleHooks};
use crate::error::{CompileError, MemberKind, Result};
use crate::source_file::{Node, SourceFile};
use crate::structures::{component, computed, data, emit, hook, method, mixin, prop, refs, watch};
use crate::symbol_table::SymbolTable;

/// Everything a pass may read besides the node itself.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'c> {
    pub source: &'c str,
    pub dialect: &'c Dialect,
    pub hooks: LifecycleHooks,
}

impl<'c> ClassifyContext<'c> {
    pub fn new(source: &'c str, dialect: &'c Dialect) -> Self {
        ClassifyContext {
            source,
            dialect,
            hooks: dialect.lifecycle_hooks(),
        }
    }
}

pub type Classifier =
    for<'t> fn(&ClassifyContext<'_>, &'t SymbolTable, Node<'_, '_>) -> Result<Cow<'t, SymbolTable>>;

pub const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("component", classify_component),
    ("mixins", classify_mixins),
    ("data", classify_data),
    ("decorated field", classify_decorated_field),
    ("decorated method", classify_decorated_method),
    ("method", classify_method),
    ("computed", classify_computed),
];

pub fn build_symbol_table(source: &SourceFile<'_>, dialect: &Dialect) -> Result<SymbolTable> {
    build_symbol_table_with(source, dialect, CLASSIFIERS)
}

/// Offers every node to every pass, pass by pass.
pub fn build_symbol_table_with(
    source: &SourceFile<'_>,
    dialect: &Dialect,
    classifiers: &[(&str, Classifier)],
) -> Result<SymbolTable> {
    let context = ClassifyContext::new(source.text(), dialect);
    let nodes = source.nodes();

    let mut table = SymbolTable::new();
    for (name, classifier) in classifiers {
        tracing::trace!(pass = name, nodes = nodes.len(), "classifying");
        for node in &nodes {
            let updated = match classifier(&context, &table, *node)? {
                Cow::Owned(updated) => Some(updated),
                Cow::Borrowed(_) => None,
            };
            if let Some(updated) = updated {
                table = updated;
            }
        }
    }
    Ok(table)
}

/// An instance member with an implementation: not static, not an
/// overload signature.
fn is_instance_implementation(node: Node<'_, '_>) -> bool {
    match node {
        Node::Method(method) => !method.r#static && method.value.body.is_some(),
        Node::Field(field) => !field.r#static,
        Node::Class(_) => false,
    }
}

fn class_decorator_names(class: &Class<'_>, source: &str) -> Vec<String> {
    decorator_names(&class.decorators, source)
}

/// A class carrying exactly one decorator, which must be the component marker.
pub fn classify_component<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    let Node::Class(class) = node else {
        return Ok(Cow::Borrowed(table));
    };
    if class.decorators.is_empty() {
        return Ok(Cow::Borrowed(table));
    }

    let name = component::class_name(class);
    if class.decorators.len() > 1 {
        return Err(CompileError::MultipleDecorators {
            kind: MemberKind::Class,
            name,
            decorators: class_decorator_names(class, ctx.source),
        });
    }

    let decorator = decorator_call(&class.decorators[0], ctx.source);
    if decorator.name != ctx.dialect.component_decorator {
        return Err(CompileError::UnknownDecorator {
            kind: MemberKind::Class,
            name,
            decorator: decorator.name,
        });
    }
    if let Some(existing) = table.component() {
        return Err(CompileError::MultipleComponents {
            first: existing.name.clone(),
            second: name,
        });
    }

    Ok(Cow::Owned(
        table.with_component(component::extract(class, &decorator, ctx.source)),
    ))
}

/// A class whose heritage clause is a call, which must be the mixins helper.
pub fn classify_mixins<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    let Node::Class(class) = node else {
        return Ok(Cow::Borrowed(table));
    };
    let Some(Expression::CallExpression(call)) = &class.super_class else {
        return Ok(Cow::Borrowed(table));
    };

    let callee = callee_name(&call.callee, ctx.source);
    if !ctx.dialect.is_mixins_helper(&callee) {
        return Err(CompileError::UnknownHeritage {
            class: component::class_name(class),
            heritage: vec![callee],
        });
    }

    let mixins = call
        .arguments
        .iter()
        .filter_map(|argument| argument.as_expression())
        .map(|argument| mixin::extract(argument, ctx.source));
    Ok(Cow::Owned(table.with_mixins(mixins)))
}

/// An undecorated instance field.
pub fn classify_data<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    match node {
        Node::Field(field) if field.decorators.is_empty() && is_instance_implementation(node) => {
            Ok(Cow::Owned(table.with_data(data::extract(field, ctx.source))))
        }
        _ => Ok(Cow::Borrowed(table)),
    }
}

/// A field with one `@Ref` or `@Prop` decorator.
pub fn classify_decorated_field<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    let Node::Field(field) = node else {
        return Ok(Cow::Borrowed(table));
    };
    if field.decorators.is_empty() {
        return Ok(Cow::Borrowed(table));
    }

    let name = property_key_name(&field.key, ctx.source);
    if field.decorators.len() > 1 {
        return Err(CompileError::MultipleDecorators {
            kind: MemberKind::Field,
            name,
            decorators: decorator_names(&field.decorators, ctx.source),
        });
    }

    let decorator = decorator_call(&field.decorators[0], ctx.source);
    let dialect = ctx.dialect;
    if decorator.name == dialect.ref_decorator {
        Ok(Cow::Owned(table.with_ref(refs::extract(field, ctx.source))))
    } else if decorator.name == dialect.prop_decorator {
        Ok(Cow::Owned(table.with_prop(prop::extract(field, &decorator, ctx.source))))
    } else {
        Err(CompileError::UnsupportedDecorator {
            kind: MemberKind::Field,
            name,
            decorator: decorator.name,
        })
    }
}

/// A method with one `@Watch` or `@Emit` decorator. Decorated accessors
/// are rejected here as well.
pub fn classify_decorated_method<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    let Node::Method(method) = node else {
        return Ok(Cow::Borrowed(table));
    };
    if method.decorators.is_empty() {
        return Ok(Cow::Borrowed(table));
    }

    let name = property_key_name(&method.key, ctx.source);
    if method.decorators.len() > 1 {
        return Err(CompileError::MultipleDecorators {
            kind: MemberKind::Method,
            name,
            decorators: decorator_names(&method.decorators, ctx.source),
        });
    }

    let decorator = decorator_call(&method.decorators[0], ctx.source);
    let dialect = ctx.dialect;
    let is_method = method.kind == MethodDefinitionKind::Method;
    if is_method && decorator.name == dialect.watch_decorator {
        let watch = watch::extract(method, &decorator, ctx.source)?;
        Ok(Cow::Owned(table.with_watch(watch)))
    } else if is_method && decorator.name == dialect.emit_decorator {
        Ok(Cow::Owned(table.with_emit(emit::extract(method, &decorator, ctx.source))))
    } else {
        Err(CompileError::UnsupportedDecorator {
            kind: MemberKind::Method,
            name,
            decorator: decorator.name,
        })
    }
}

/// An undecorated method: a lifecycle hook when its name is one, a plain
/// method otherwise.
pub fn classify_method<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    let Node::Method(method) = node else {
        return Ok(Cow::Borrowed(table));
    };
    if !method.decorators.is_empty()
        || method.kind != MethodDefinitionKind::Method
        || !is_instance_implementation(node)
    {
        return Ok(Cow::Borrowed(table));
    }

    let name = property_key_name(&method.key, ctx.source);
    if ctx.hooks.contains(&name) {
        Ok(Cow::Owned(table.with_hook(hook::extract(method, ctx.source))))
    } else {
        Ok(Cow::Owned(table.with_method(method::extract(method, ctx.source))))
    }
}

/// An undecorated getter. Setters have no options-API counterpart here and
/// are skipped.
pub fn classify_computed<'t>(
    ctx: &ClassifyContext<'_>,
    table: &'t SymbolTable,
    node: Node<'_, '_>,
) -> Result<Cow<'t, SymbolTable>> {
    let Node::Method(method) = node else {
        return Ok(Cow::Borrowed(table));
    };
    if !method.decorators.is_empty() || !is_instance_implementation(node) {
        return Ok(Cow::Borrowed(table));
    }

    match method.kind {
        MethodDefinitionKind::Get => Ok(Cow::Owned(
            table.with_getter(computed::extract(method, ctx.source)),
        )),
        MethodDefinitionKind::Set => {
            tracing::warn!(
                setter = %property_key_name(&method.key, ctx.source),
                "setter ignored"
            );
            Ok(Cow::Borrowed(table))
        }
        _ => Ok(Cow::Borrowed(table)),
    }
}
