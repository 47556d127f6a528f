//! Source File
//!
//! Parses a script block with oxc and exposes the views the classifier and
//! code generator read: the component candidate classes, their members as
//! [`Node`]s, and the module-level declarations that pass through.

use std::borrow::Cow;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Class, ClassElement, Declaration, ExportDefaultDeclarationKind, ExportNamedDeclaration,
    Expression, ImportDeclaration, MethodDefinition, Program, PropertyDefinition, Statement,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

use crate::error::{CompileError, Result};

/// One node offered to the classifier passes.
#[derive(Debug, Clone, Copy)]
pub enum Node<'n, 'a> {
    Class(&'n Class<'a>),
    Field(&'n PropertyDefinition<'a>),
    Method(&'n MethodDefinition<'a>),
}

/// A module-level statement carried over to the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThroughKind {
    TypeAlias,
    Interface,
    Other,
}

pub struct SourceFile<'a> {
    text: &'a str,
    program: Program<'a>,
}

impl<'a> SourceFile<'a> {
    pub fn parse(allocator: &'a Allocator, text: &'a str) -> Result<Self> {
        let source_type = SourceType::default().with_typescript(true).with_module(true);
        let ret = Parser::new(allocator, text, source_type).parse();

        if let Some(error) = ret.errors.first() {
            return Err(CompileError::Parse {
                message: error.to_string(),
            });
        }

        Ok(Self {
            text,
            program: ret.program,
        })
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn program(&self) -> &Program<'a> {
        &self.program
    }

    pub fn slice(&self, span: Span) -> &'a str {
        span_text(self.text, span)
    }

    /// Top-level classes that carry a decorator or a heritage call.
    pub fn component_classes(&self) -> Vec<&Class<'a>> {
        self.program
            .body
            .iter()
            .filter_map(top_level_class)
            .filter(|class| is_component_candidate(class))
            .collect()
    }

    /// Every node the classifier passes are offered, in source order.
    pub fn nodes(&self) -> Vec<Node<'_, 'a>> {
        let mut nodes = Vec::new();
        for class in self.component_classes() {
            nodes.push(Node::Class(class));
            for element in &class.body.body {
                match element {
                    ClassElement::PropertyDefinition(field) => nodes.push(Node::Field(field)),
                    ClassElement::MethodDefinition(method) => nodes.push(Node::Method(method)),
                    _ => {}
                }
            }
        }
        nodes
    }

    pub fn import_declarations(&self) -> Vec<&ImportDeclaration<'a>> {
        self.program
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                Statement::ImportDeclaration(decl) => Some(&**decl),
                _ => None,
            })
            .collect()
    }

    /// Statements other than imports and the component class, with their
    /// source text. Exports naming the component class are dropped, or
    /// narrowed to their other specifiers.
    pub fn pass_through(&self) -> Vec<(PassThroughKind, Cow<'a, str>)> {
        let components: Vec<&str> = self
            .component_classes()
            .into_iter()
            .filter_map(|class| class.id.as_ref().map(|id| id.name.as_str()))
            .collect();

        self.program
            .body
            .iter()
            .filter_map(|stmt| {
                let kind = match stmt {
                    Statement::ImportDeclaration(_) => return None,
                    Statement::TSTypeAliasDeclaration(_) => PassThroughKind::TypeAlias,
                    Statement::TSInterfaceDeclaration(_) => PassThroughKind::Interface,
                    Statement::ExportNamedDeclaration(decl) => match &decl.declaration {
                        Some(Declaration::TSTypeAliasDeclaration(_)) => PassThroughKind::TypeAlias,
                        Some(Declaration::TSInterfaceDeclaration(_)) => PassThroughKind::Interface,
                        Some(_) => PassThroughKind::Other,
                        None => {
                            return self
                                .without_component_specifiers(decl, &components)
                                .map(|text| (PassThroughKind::Other, text));
                        }
                    },
                    Statement::ExportDefaultDeclaration(decl) => match &decl.declaration {
                        ExportDefaultDeclarationKind::Identifier(id)
                            if components.contains(&id.name.as_str()) =>
                        {
                            return None;
                        }
                        _ => PassThroughKind::Other,
                    },
                    _ => PassThroughKind::Other,
                };
                if top_level_class(stmt).is_some_and(is_component_candidate) {
                    return None;
                }
                Some((kind, Cow::Borrowed(self.slice(stmt.span()))))
            })
            .collect()
    }

    /// `export { Foo as default, helper }` without the specifiers whose
    /// local binding is a component class.
    fn without_component_specifiers(
        &self,
        decl: &ExportNamedDeclaration<'a>,
        components: &[&str],
    ) -> Option<Cow<'a, str>> {
        if decl.source.is_some() {
            return Some(Cow::Borrowed(self.slice(decl.span)));
        }
        let (dropped, kept): (Vec<_>, Vec<_>) = decl
            .specifiers
            .iter()
            .partition(|spec| components.contains(&self.slice(spec.local.span())));
        if dropped.is_empty() {
            return Some(Cow::Borrowed(self.slice(decl.span)));
        }
        if kept.is_empty() {
            return None;
        }
        let specifiers: Vec<&str> = kept.iter().map(|spec| self.slice(spec.span)).collect();
        Some(Cow::Owned(format!("export {{ {} }}", specifiers.join(", "))))
    }
}

fn top_level_class<'s, 'a>(stmt: &'s Statement<'a>) -> Option<&'s Class<'a>> {
    match stmt {
        Statement::ClassDeclaration(class) => Some(&**class),
        Statement::ExportDefaultDeclaration(decl) => match &decl.declaration {
            ExportDefaultDeclarationKind::ClassDeclaration(class) => Some(&**class),
            _ => None,
        },
        Statement::ExportNamedDeclaration(decl) => match &decl.declaration {
            Some(Declaration::ClassDeclaration(class)) => Some(&**class),
            _ => None,
        },
        _ => None,
    }
}

fn is_component_candidate(class: &Class<'_>) -> bool {
    !class.decorators.is_empty()
        || matches!(class.super_class, Some(Expression::CallExpression(_)))
}

pub fn span_text(source: &str, span: Span) -> &str {
    &source[span.start as usize..span.end as usize]
}
