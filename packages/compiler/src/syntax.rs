//! Syntax Facts
//!
//! Positions the text-level passes need (template literal content, string
//! literals, statement terminators), read from an oxc parse of the text so
//! regex literals, comments and nested templates are never misread.
//!
//! Fragments that are not a module on their own (a method statement using
//! `super` or `await`, an object entry) are parsed inside a wrapper and the
//! positions shifted back.

use std::ops::Range;

use oxc_allocator::Allocator;
use oxc_ast::ast::{PropertyDefinition, Statement, StringLiteral, TSSignature, TemplateElement};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

/// Prefix/suffix pairs tried in order when parsing a fragment.
const FRAGMENT_WRAPPERS: &[(&str, &str)] = &[
    ("", ""),
    ("class _ extends Object { async *_() {\n", "\n} }"),
    ("({\n", "\n})"),
    ("(\n", "\n)"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxFacts {
    template_content: Vec<Range<usize>>,
    string_literals: Vec<Range<usize>>,
    terminators: Vec<usize>,
}

impl SyntaxFacts {
    /// Facts for a complete module, or `None` when it does not parse.
    pub fn of_module(text: &str) -> Option<Self> {
        parse_wrapped(text, "", "")
    }

    /// Facts for a statement, declaration, object entry or expression.
    pub fn of_fragment(text: &str) -> Option<Self> {
        FRAGMENT_WRAPPERS
            .iter()
            .find_map(|(prefix, suffix)| parse_wrapped(text, prefix, suffix))
    }

    /// For each line of `text`, whether it begins inside template literal
    /// content (its leading whitespace is part of a string).
    pub fn template_lines(&self, text: &str) -> Vec<bool> {
        let mut lines = vec![false];
        lines.extend(
            text.match_indices('\n')
                .map(|(newline, _)| self.in_template(newline)),
        );
        lines
    }

    fn in_template(&self, offset: usize) -> bool {
        self.template_content.iter().any(|range| range.contains(&offset))
    }

    /// Spans of string literals, quotes included, in source order.
    pub fn string_literals(&self) -> &[Range<usize>] {
        &self.string_literals
    }

    /// Offsets of the `;` ending a statement, class field or type member.
    pub fn terminators(&self) -> &[usize] {
        &self.terminators
    }
}

/// Template-content flags for a fragment about to be re-indented. A
/// fragment that does not parse in any form is treated as plain code.
pub fn template_lines(fragment: &str) -> Vec<bool> {
    if !fragment.contains('\n') {
        return vec![false];
    }
    match SyntaxFacts::of_fragment(fragment) {
        Some(facts) => facts.template_lines(fragment),
        None => {
            tracing::debug!("fragment did not parse; indenting every line");
            vec![false; fragment.split('\n').count()]
        }
    }
}

fn parse_wrapped(text: &str, prefix: &str, suffix: &str) -> Option<SyntaxFacts> {
    let wrapped = format!("{}{}{}", prefix, text, suffix);
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_typescript(true).with_module(true);
    let ret = Parser::new(&allocator, &wrapped, source_type).parse();
    if ret.panicked || !ret.errors.is_empty() {
        return None;
    }

    let mut collector = Collector {
        source: &wrapped,
        facts: SyntaxFacts::default(),
    };
    collector.visit_program(&ret.program);

    let shift = prefix.len();
    let inside = |range: &Range<usize>| range.start >= shift && range.end <= shift + text.len();
    let mut facts = collector.facts;
    facts.template_content = shifted(facts.template_content, shift, inside);
    facts.string_literals = shifted(facts.string_literals, shift, inside);
    facts.string_literals.sort_by_key(|range| range.start);
    facts.terminators = facts
        .terminators
        .into_iter()
        .filter(|offset| *offset >= shift && *offset < shift + text.len())
        .map(|offset| offset - shift)
        .collect();
    facts.terminators.sort_unstable();
    facts.terminators.dedup();
    Some(facts)
}

fn shifted(
    ranges: Vec<Range<usize>>,
    shift: usize,
    inside: impl Fn(&Range<usize>) -> bool,
) -> Vec<Range<usize>> {
    ranges
        .into_iter()
        .filter(|range| inside(range))
        .map(|range| range.start - shift..range.end - shift)
        .collect()
}

fn owns_terminator(statement: &Statement<'_>) -> bool {
    matches!(
        statement,
        Statement::ExpressionStatement(_)
            | Statement::VariableDeclaration(_)
            | Statement::ReturnStatement(_)
            | Statement::ThrowStatement(_)
            | Statement::BreakStatement(_)
            | Statement::ContinueStatement(_)
            | Statement::DoWhileStatement(_)
            | Statement::DebuggerStatement(_)
            | Statement::ImportDeclaration(_)
            | Statement::ExportAllDeclaration(_)
            | Statement::ExportNamedDeclaration(_)
            | Statement::ExportDefaultDeclaration(_)
            | Statement::TSTypeAliasDeclaration(_)
            | Statement::TSExportAssignment(_)
            | Statement::TSImportEqualsDeclaration(_)
    )
}

fn range_of(span: Span) -> Range<usize> {
    span.start as usize..span.end as usize
}

struct Collector<'s> {
    source: &'s str,
    facts: SyntaxFacts,
}

impl Collector<'_> {
    fn terminator(&mut self, span: Span) {
        let end = span.end as usize;
        if end > span.start as usize && self.source.as_bytes().get(end - 1) == Some(&b';') {
            self.facts.terminators.push(end - 1);
        }
    }
}

impl<'a> Visit<'a> for Collector<'_> {
    fn visit_statement(&mut self, it: &Statement<'a>) {
        // compound statements end with their body, which may be a lone `;`
        if owns_terminator(it) {
            self.terminator(it.span());
        }
        walk::walk_statement(self, it);
    }

    fn visit_property_definition(&mut self, it: &PropertyDefinition<'a>) {
        self.terminator(it.span);
        walk::walk_property_definition(self, it);
    }

    fn visit_ts_signature(&mut self, it: &TSSignature<'a>) {
        self.terminator(it.span());
        walk::walk_ts_signature(self, it);
    }

    fn visit_string_literal(&mut self, it: &StringLiteral<'a>) {
        self.facts.string_literals.push(range_of(it.span));
    }

    fn visit_template_element(&mut self, it: &TemplateElement<'a>) {
        self.facts.template_content.push(range_of(it.span));
    }
}
