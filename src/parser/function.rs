//! Function signature parsing for `name(params) -> returns` declarations.
//!
//! This is the capability the hook adapter delegates to. Builders only see
//! the [`FunctionSignatureParser`] trait, so a host can plug in its own.

use crate::error::{Result, SigError};
use crate::types::{ParsedSignature, RefContext, SignatureNode};

/// Parses and renders function-style signatures.
pub trait FunctionSignatureParser: Send + Sync {
    /// Parse `sig` under `ctx`, producing rendered nodes and the full name.
    fn parse(&self, sig: &str, ctx: &RefContext) -> Result<ParsedSignature>;
}

/// Default parser for Python-style declarations.
///
/// Accepts `[qualifier.]name[(params)] [-> returns]`. A missing parameter
/// list renders as `()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyStyleParser;

impl FunctionSignatureParser for PyStyleParser {
    fn parse(&self, sig: &str, ctx: &RefContext) -> Result<ParsedSignature> {
        let func = FunctionSignature::parse(sig)?;
        Ok(ParsedSignature::new(func.render(ctx), func.full_name(ctx)))
    }
}

/// The kind of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Positional,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
    /// bare `/`
    PositionalOnlyMarker,
    /// bare `*`
    KeywordOnlyMarker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub kind: ParamKind,
    /// Name without leading stars. Empty for markers.
    pub name: String,
    pub annotation: Option<String>,
    pub default: Option<String>,
}

/// A parsed function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Dotted prefix including the trailing `.`, or empty.
    pub qualifier: String,
    pub name: String,
    pub params: Vec<Parameter>,
    pub returns: Option<String>,
}

fn invalid(message: String) -> SigError {
    SigError::Signature {
        message,
        help: Some("Expected a declaration like `name(arg: type, *args) -> type`".to_string()),
    }
}

impl FunctionSignature {
    pub fn parse(sig: &str) -> Result<Self> {
        let sig = sig.trim();

        let (head, tail) = match sig.find('(') {
            Some(i) => (&sig[..i], Some(&sig[i..])),
            None => (sig, None),
        };
        let (qualifier, name) = split_name(head.trim())?;

        let (params, returns) = match tail {
            None => (Vec::new(), None),
            Some(tail) => {
                let close = matching_close(tail)?;
                let params = parse_params(&tail[1..close])?;
                let rest = tail[close + 1..].trim();

                let returns = if rest.is_empty() {
                    None
                } else if let Some(ret) = rest.strip_prefix("->") {
                    let ret = ret.trim();
                    if ret.is_empty() {
                        return Err(invalid(format!("missing return annotation in '{}'", sig)));
                    }
                    Some(ret.to_string())
                } else {
                    return Err(invalid(format!(
                        "unexpected '{}' after parameter list in '{}'",
                        rest, sig
                    )));
                };
                (params, returns)
            }
        };

        Ok(Self {
            qualifier: qualifier.to_string(),
            name: name.to_string(),
            params,
            returns,
        })
    }

    /// Qualifier plus name, e.g. `Engine.hook_connect`.
    pub fn qualified_name(&self) -> String {
        format!("{}{}", self.qualifier, self.name)
    }

    /// Cross-reference name under `ctx`'s module.
    pub fn full_name(&self, ctx: &RefContext) -> String {
        match &ctx.module {
            Some(module) => format!("{}.{}", module, self.qualified_name()),
            None => self.qualified_name(),
        }
    }

    pub fn render(&self, ctx: &RefContext) -> Vec<SignatureNode> {
        let mut nodes = Vec::new();

        let prefix = match &ctx.module {
            Some(module) => format!("{}.{}", module, self.qualifier),
            None => self.qualifier.clone(),
        };
        if !prefix.is_empty() {
            nodes.push(SignatureNode::additional_text(prefix));
        }
        nodes.push(SignatureNode::name(&self.name));

        nodes.push(SignatureNode::punctuation("("));
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                nodes.push(SignatureNode::punctuation(","));
                nodes.push(SignatureNode::space());
            }
            param.render_into(&mut nodes);
        }
        nodes.push(SignatureNode::punctuation(")"));

        if let Some(ret) = &self.returns {
            nodes.push(SignatureNode::space());
            nodes.push(SignatureNode::punctuation("->"));
            nodes.push(SignatureNode::space());
            nodes.push(SignatureNode::returns(ret));
        }

        nodes
    }
}

impl Parameter {
    fn render_into(&self, nodes: &mut Vec<SignatureNode>) {
        match self.kind {
            ParamKind::PositionalOnlyMarker => nodes.push(SignatureNode::punctuation("/")),
            ParamKind::KeywordOnlyMarker => nodes.push(SignatureNode::punctuation("*")),
            ParamKind::VarPositional => {
                nodes.push(SignatureNode::punctuation("*"));
                nodes.push(SignatureNode::param_name(&self.name));
            }
            ParamKind::VarKeyword => {
                nodes.push(SignatureNode::punctuation("**"));
                nodes.push(SignatureNode::param_name(&self.name));
            }
            ParamKind::Positional => nodes.push(SignatureNode::param_name(&self.name)),
        }

        if let Some(annotation) = &self.annotation {
            nodes.push(SignatureNode::punctuation(":"));
            nodes.push(SignatureNode::space());
            nodes.push(SignatureNode::additional_text(annotation));
        }

        if let Some(default) = &self.default {
            if self.annotation.is_some() {
                nodes.push(SignatureNode::space());
                nodes.push(SignatureNode::punctuation("="));
                nodes.push(SignatureNode::space());
            } else {
                nodes.push(SignatureNode::punctuation("="));
            }
            nodes.push(SignatureNode::additional_text(default));
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `a.b.name` into (`a.b.`, `name`).
fn split_name(head: &str) -> Result<(&str, &str)> {
    if head.is_empty() {
        return Err(invalid("missing function name".to_string()));
    }
    if !head.chars().all(|c| is_ident_char(c) || c == '.') {
        return Err(invalid(format!("invalid function name '{}'", head)));
    }

    let split = head.rfind('.').map(|i| i + 1).unwrap_or(0);
    let (qualifier, name) = head.split_at(split);
    if name.is_empty() {
        return Err(invalid(format!("function name '{}' ends with '.'", head)));
    }
    Ok((qualifier, name))
}

/// Bracket and quote tracking for splitting at top level.
#[derive(Debug, Default)]
struct Nesting {
    closers: Vec<char>,
    quote: Option<char>,
    /// Previous char was a backslash inside a quote.
    escaped: bool,
}

impl Nesting {
    fn feed(&mut self, c: char) -> Result<()> {
        if let Some(q) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == q {
                self.quote = None;
            }
            return Ok(());
        }

        match c {
            '\'' | '"' => self.quote = Some(c),
            '(' => self.closers.push(')'),
            '[' => self.closers.push(']'),
            '{' => self.closers.push('}'),
            ')' | ']' | '}' => {
                if self.closers.pop() != Some(c) {
                    return Err(invalid(format!("unbalanced '{}'", c)));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn at_top(&self) -> bool {
        self.closers.is_empty() && self.quote.is_none()
    }
}

/// Byte index of the `)` matching the `(` that starts `s`.
fn matching_close(s: &str) -> Result<usize> {
    let mut nesting = Nesting::default();
    for (i, c) in s.char_indices() {
        nesting.feed(c)?;
        if nesting.at_top() {
            return Ok(i);
        }
    }
    Err(invalid(format!("unclosed parameter list in '{}'", s)))
}

/// Byte offsets of `target` outside brackets and quotes.
fn top_level_positions(s: &str, target: char) -> Result<Vec<usize>> {
    let mut nesting = Nesting::default();
    let mut positions = Vec::new();
    for (i, c) in s.char_indices() {
        if c == target && nesting.at_top() {
            positions.push(i);
            continue;
        }
        nesting.feed(c)?;
    }
    Ok(positions)
}

fn parse_params(inner: &str) -> Result<Vec<Parameter>> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    let mut start = 0;
    let mut bounds = top_level_positions(inner, ',')?;
    bounds.push(inner.len());

    for end in bounds {
        params.push(parse_param(inner[start..end].trim())?);
        start = end + 1;
    }
    Ok(params)
}

fn parse_param(p: &str) -> Result<Parameter> {
    if p.is_empty() {
        return Err(invalid("empty parameter".to_string()));
    }

    let eq = top_level_positions(p, '=')?.first().copied();
    let colon = match (top_level_positions(p, ':')?.first().copied(), eq) {
        (Some(c), Some(e)) if c > e => None,
        (c, _) => c,
    };

    let name_end = colon.or(eq).unwrap_or(p.len());
    let raw_name = p[..name_end].trim();

    let annotation = match colon {
        Some(c) => Some(non_empty(&p[c + 1..eq.unwrap_or(p.len())], "annotation", p)?),
        None => None,
    };
    let default = match eq {
        Some(e) => Some(non_empty(&p[e + 1..], "default value", p)?),
        None => None,
    };

    let (kind, name) = match raw_name {
        "/" => (ParamKind::PositionalOnlyMarker, ""),
        "*" => (ParamKind::KeywordOnlyMarker, ""),
        _ => {
            if let Some(rest) = raw_name.strip_prefix("**") {
                (ParamKind::VarKeyword, rest)
            } else if let Some(rest) = raw_name.strip_prefix('*') {
                (ParamKind::VarPositional, rest)
            } else {
                (ParamKind::Positional, raw_name)
            }
        }
    };

    let is_marker = matches!(
        kind,
        ParamKind::PositionalOnlyMarker | ParamKind::KeywordOnlyMarker
    );
    if is_marker && (annotation.is_some() || default.is_some()) {
        return Err(invalid(format!("marker '{}' cannot take a value", raw_name)));
    }
    if !is_marker && (name.is_empty() || !name.chars().all(is_ident_char)) {
        return Err(invalid(format!("invalid parameter name '{}'", raw_name)));
    }

    Ok(Parameter {
        kind,
        name: name.to_string(),
        annotation,
        default,
    })
}

fn non_empty(s: &str, what: &str, param: &str) -> Result<String> {
    let s = s.trim();
    if s.is_empty() {
        Err(invalid(format!("empty {} in parameter '{}'", what, param)))
    } else {
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeRole;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple() {
        let func = FunctionSignature::parse("stroked(stroke)").unwrap();
        assert_eq!(func.qualifier, "");
        assert_eq!(func.name, "stroked");
        assert_eq!(func.params.len(), 1);
        assert_eq!(func.params[0].kind, ParamKind::Positional);
        assert_eq!(func.returns, None);
    }

    #[test]
    fn test_parse_annotations_defaults_returns() {
        let func = FunctionSignature::parse(
            "translated(old: list[Translation], new: list[Translation] = None) -> None",
        )
        .unwrap();

        assert_eq!(func.params.len(), 2);
        assert_eq!(func.params[0].annotation.as_deref(), Some("list[Translation]"));
        assert_eq!(func.params[1].default.as_deref(), Some("None"));
        assert_eq!(func.returns.as_deref(), Some("None"));
    }

    #[test]
    fn test_parse_star_params_and_markers() {
        let func = FunctionSignature::parse("f(a, /, b, *, c, *args, **kwargs)").unwrap();
        let kinds: Vec<_> = func.params.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ParamKind::Positional,
                ParamKind::PositionalOnlyMarker,
                ParamKind::Positional,
                ParamKind::KeywordOnlyMarker,
                ParamKind::Positional,
                ParamKind::VarPositional,
                ParamKind::VarKeyword,
            ]
        );
        assert_eq!(func.params[5].name, "args");
    }

    #[test]
    fn test_parse_nested_commas_and_quotes() {
        let func = FunctionSignature::parse("f(a: dict[str, int], sep=',)')").unwrap();
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.params[0].annotation.as_deref(), Some("dict[str, int]"));
        assert_eq!(func.params[1].default.as_deref(), Some("',)'"));
    }

    #[test]
    fn test_parse_escaped_quotes() {
        let func = FunctionSignature::parse(r#"f(a="x\"y", b='it\'s)', c)"#).unwrap();
        assert_eq!(func.params.len(), 3);
        assert_eq!(func.params[0].default.as_deref(), Some(r#""x\"y""#));
        assert_eq!(func.params[1].default.as_deref(), Some(r"'it\'s)'"));
        assert_eq!(func.params[2].name, "c");
    }

    #[test]
    fn test_parse_without_parens() {
        let func = FunctionSignature::parse("focus").unwrap();
        assert!(func.params.is_empty());
        let nodes = func.render(&RefContext::new());
        let texts: Vec<_> = nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["focus", "(", ")"]);
    }

    #[test]
    fn test_qualified_name() {
        let func = FunctionSignature::parse("Engine.hook_connect(hook, callback)").unwrap();
        assert_eq!(func.qualifier, "Engine.");
        assert_eq!(func.qualified_name(), "Engine.hook_connect");
        assert_eq!(
            func.full_name(&RefContext::with_module("plover.engine")),
            "plover.engine.Engine.hook_connect"
        );
    }

    #[test]
    fn test_render_nodes() {
        let func = FunctionSignature::parse("send_string(s: str = '') -> None").unwrap();
        let nodes = func.render(&RefContext::new());

        assert_eq!(nodes[0], SignatureNode::name("send_string"));
        assert_eq!(nodes[2], SignatureNode::param_name("s"));
        let text: String = nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(text, "send_string(s: str = '') -> None");
        assert_eq!(nodes.last().map(|n| n.role), Some(NodeRole::Returns));
    }

    #[test]
    fn test_render_module_prefix() {
        let func = FunctionSignature::parse("stroked(stroke)").unwrap();
        let nodes = func.render(&RefContext::with_module("plover.steno"));
        assert_eq!(nodes[0], SignatureNode::additional_text("plover.steno."));
    }

    #[test]
    fn test_parser_identifier() {
        let parsed = PyStyleParser
            .parse("quit(code=0)", &RefContext::with_module("plover"))
            .unwrap();
        assert_eq!(parsed.identifier, "plover.quit");
        assert_eq!(parsed.display_text(), "plover.quit(code=0)");
    }

    #[test]
    fn test_rejects_malformed() {
        for sig in [
            "",
            "(a)",
            "foo.(a)",
            "foo(a",
            "foo(a]",
            "foo(a) extra",
            "foo(a) ->",
            "foo(a,,b)",
            "foo(a:)",
            "foo(*=1)",
            "foo bar(a)",
            "foo(1a-)",
        ] {
            assert!(
                FunctionSignature::parse(sig).is_err(),
                "expected '{}' to be rejected",
                sig
            );
        }
    }
}
