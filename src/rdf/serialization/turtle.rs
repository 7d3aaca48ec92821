//! Turtle format implementation
//!
//! Covers the subset used to exchange knowledge bases: `@base` and
//! `@prefix` directives, `#` line comments, `;`/`,` abbreviations, `a` for
//! `rdf:type`, and literals written as `"text"`, `"text"@lang` or
//! `"text"^^type`. A document carries at most one graph, named by its base
//! IRI.

use super::{ParseError, ParseResult, Parser, SerializeResult, TurtleOptions};
use crate::rdf::{
    LocalizedLiteral, NamedNode, Namespace, Node, Statement, TypedLiteral, DEFAULT_LANGUAGE,
    RDF_TYPE,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)\s*?#.*").expect("valid comment regex"));

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*@(?:prefix|base)\s+.+?>\s*\.").expect("valid directive regex")
});

// the trailing `.` is left unconsumed so it can start the next directive
static PREFIX_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s.])\s*@prefix\s+(\S*?):\s*<(.+?)#*>").expect("valid prefix regex")
});

static BASE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s.])\s*@base\s*<(.+?)>").expect("valid base regex")
});

static PREFIXED_NAME_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*:").expect("valid prefixed name regex"));

static LEADING_IRI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(a|<[^>]*>|[^\s<>]*?:\S+?)\s+").expect("valid leading iri regex")
});

static LITERAL_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^"(.*)"(?:@([^\s"]+)|\^\^(\S+))?$"#).expect("valid literal regex")
});

static IRI_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:a|<[^>]*>|[^\s"<>]*:[^\s"]*)$"#).expect("valid iri regex")
});

/// Turtle parser
///
/// Marshals statements to Turtle and back. See [`TurtleOptions`] for the
/// knobs.
#[derive(Debug, Clone, Default)]
pub struct TurtleParser {
    options: TurtleOptions,
}

impl TurtleParser {
    pub fn new(options: TurtleOptions) -> Self {
        Self { options }
    }

    fn marshal_node(&self, node: &Node, ns: &Namespace) -> String {
        match node {
            Node::Named(n) => self.marshal_iri(n.iri(), ns),
            Node::Localized(l) => format!("{}@{}", quote(l.value()), l.language()),
            Node::Typed(t) => format!(
                "{}^^{}",
                quote(t.value()),
                self.marshal_iri(t.datatype().iri(), ns)
            ),
        }
    }

    fn marshal_iri(&self, iri: &str, ns: &Namespace) -> String {
        if self.options.substitute {
            for (prefix, stem) in ns.iter() {
                let stem = format!("{}#", stem);
                if iri.contains(&stem) {
                    let short = iri.replacen(&stem, &format!("{}:", prefix), 1);
                    if short == "rdf:type" {
                        return "a".to_string();
                    }
                    return short;
                }
            }
        }
        format!("<{}>", iri)
    }

    /// Base IRI from the single `@base` directive, or from the first
    /// subject when falling back is enabled
    fn extract_base_iri(
        &self,
        text: &str,
        clauses: &[&str],
        ns: &Namespace,
    ) -> ParseResult<Option<String>> {
        let found: Vec<&str> = BASE_DIRECTIVE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        match found.as_slice() {
            [] => {}
            [base] => return Ok(Some(base.to_string())),
            many => return Err(ParseError::AmbiguousBaseDirective(many.len())),
        }

        let fallback = self.options.fallback_to_first_subject_for_base_iri;
        if fallback {
            if let Some((token, _)) = clauses.first().and_then(|c| split_leading_iri(c)) {
                return Ok(Some(unmarshal_iri(token, ns)));
            }
        }

        if self.options.require_base_iri {
            return Err(if fallback {
                ParseError::NoSubjectForBaseIri
            } else {
                ParseError::MissingBaseDirective
            });
        }
        Ok(None)
    }
}

impl Parser for TurtleParser {
    fn marshal(&self, stmts: &[Statement]) -> SerializeResult<String> {
        let mut ns = Namespace::new().include(&self.options.namespace);
        let mut ttl = String::new();

        if let Some(base) = infer_base_iri(stmts) {
            debug!(base, "marshal: single graph, emitting @base");
            ns.set("", base);
            ttl.push_str(&format!("@base <{}> .\n", base));
        }

        if self.options.substitute {
            for (prefix, stem) in ns.iter() {
                ttl.push_str(&format!("@prefix {}: <{}#> .\n", prefix, stem));
            }
        }

        // subject -> predicate -> objects, graphs are not part of the key
        let mut grouped: BTreeMap<&str, BTreeMap<&str, Vec<&Node>>> = BTreeMap::new();
        for stmt in stmts {
            grouped
                .entry(stmt.subject().iri())
                .or_default()
                .entry(stmt.predicate().iri())
                .or_default()
                .push(stmt.object());
        }

        let pretty = self.options.pretty_print;
        for (subject, predicates) in &grouped {
            if pretty {
                ttl.push_str(&format!("\n# {}\n", subject));
            }
            ttl.push_str(&self.marshal_iri(subject, &ns));
            ttl.push(' ');

            for (p_idx, (predicate, objects)) in predicates.iter().enumerate() {
                if p_idx > 0 {
                    ttl.push_str("; ");
                }
                if pretty {
                    ttl.push_str("\n    ");
                }
                ttl.push_str(&self.marshal_iri(predicate, &ns));
                ttl.push(' ');

                let mut objects = objects.clone();
                objects.sort_by_cached_key(|o| o.to_string());
                for (o_idx, object) in objects.iter().enumerate() {
                    if o_idx > 0 {
                        ttl.push_str(", ");
                    }
                    if pretty {
                        ttl.push_str("\n        ");
                    }
                    ttl.push_str(&self.marshal_node(object, &ns));
                    ttl.push(' ');
                }
            }

            ttl.push_str(".\n");
        }

        debug!(
            statements = stmts.len(),
            subjects = grouped.len(),
            "marshaled turtle"
        );
        Ok(ttl)
    }

    fn unmarshal(&self, text: &str) -> ParseResult<Vec<Statement>> {
        let text = COMMENT_LINE.replace_all(text, "");
        let body = DIRECTIVE
            .replace_all(&text, "")
            .replace(['\r', '\n'], " ");

        let mut ns = Namespace::new().include(&extract_namespace(&text));

        let clauses: Vec<&str> = split_top_level(&body, '.', ends_clause)
            .into_iter()
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .collect();

        let graph = self
            .extract_base_iri(&text, &clauses, &ns)
            .inspect_err(|err| warn!(%err, "unmarshal: no usable base IRI"))?
            .filter(|base| !base.is_empty())
            .map(NamedNode::new);
        if let Some(graph) = &graph {
            debug!(base = graph.iri(), "unmarshal: using base IRI as graph");
            ns.set("", graph.iri());
        }

        let mut result: Vec<Statement> = Vec::new();
        for clause in &clauses {
            let (subject, rest) = split_leading_iri(clause).ok_or_else(|| {
                warn!(clause, "unmarshal: clause without subject");
                ParseError::MalformedClause(format!("no subject in `{}`", clause))
            })?;
            let subject = NamedNode::new(unmarshal_iri(subject, &ns));

            let groups = split_top_level(rest, ';', |_| true);
            for group in groups.into_iter().map(str::trim).filter(|g| !g.is_empty()) {
                let (predicate, objects) = split_leading_iri(group).ok_or_else(|| {
                    warn!(group, "unmarshal: predicate group without predicate");
                    ParseError::MalformedClause(format!("no predicate in `{}`", group))
                })?;
                let predicate = NamedNode::new(unmarshal_iri(predicate, &ns));

                for token in extract_objects(objects) {
                    let object = unmarshal_node(token, &ns)?;
                    let stmt =
                        Statement::new(subject.clone(), predicate.clone(), object, graph.clone());
                    if !result.contains(&stmt) {
                        result.push(stmt);
                    }
                }
            }
        }

        debug!(
            clauses = clauses.len(),
            statements = result.len(),
            "unmarshaled turtle"
        );
        Ok(result)
    }
}

/// The shared graph IRI when every scoped statement agrees on one
fn infer_base_iri(stmts: &[Statement]) -> Option<&str> {
    let mut graphs = stmts.iter().filter_map(|s| s.graph()).map(|g| g.iri());
    let first = graphs.next()?;
    if first.is_empty() || !graphs.all(|g| g == first) {
        return None;
    }
    Some(first)
}

/// Wrap a value in double quotes, escaping every quote that is not
/// already preceded by a backslash
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut prev = None;
    for c in value.chars() {
        if c == '"' && prev != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        prev = Some(c);
    }
    out.push('"');
    out
}

/// All `@prefix` directives of a document, stems without trailing `#`
fn extract_namespace(text: &str) -> Namespace {
    PREFIX_DIRECTIVE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Split a clause into its leading IRI token and the trimmed remainder
fn split_leading_iri(text: &str) -> Option<(&str, &str)> {
    let caps = LEADING_IRI.captures(text)?;
    let token = caps.get(1)?.as_str();
    let rest = &text[caps.get(0)?.end()..];
    Some((token, rest.trim()))
}

/// Whether a `.` followed by `rest` terminates a clause: the next clause
/// may follow after whitespace or directly as `<iri>` or `prefix:local`
fn ends_clause(rest: &str) -> bool {
    rest.is_empty()
        || rest.starts_with(char::is_whitespace)
        || rest.starts_with('<')
        || PREFIXED_NAME_START.is_match(rest)
}

/// Split on `separator` outside of quoted literals and `<...>` IRIs.
/// `accept` sees the text right after a candidate separator and decides
/// whether it really is one.
fn split_top_level(text: &str, separator: char, accept: impl Fn(&str) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_literal = false;
    let mut in_iri = false;
    let mut escaped = false;

    for (idx, c) in text.char_indices() {
        if in_literal {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_literal = false;
            }
            continue;
        }
        if in_iri {
            in_iri = c != '>';
            continue;
        }
        match c {
            '"' => in_literal = true,
            '<' => in_iri = true,
            _ if c == separator => {
                let next = idx + c.len_utf8();
                if accept(&text[next..]) {
                    parts.push(&text[start..idx]);
                    start = next;
                }
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Object tokens of a predicate group: literals first, then IRIs, each in
/// document order
fn extract_objects(text: &str) -> Vec<&str> {
    let (literals, iris): (Vec<&str>, Vec<&str>) = split_top_level(text, ',', |_| true)
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .partition(|token| token.starts_with('"'));
    literals.into_iter().chain(iris).collect()
}

fn unmarshal_node(token: &str, ns: &Namespace) -> ParseResult<Node> {
    let token = token.trim();

    if let Some(caps) = LITERAL_OBJECT.captures(token) {
        let value = caps.get(1).map_or("", |m| m.as_str());
        if let Some(language) = caps.get(2) {
            return Ok(LocalizedLiteral::new(value, language.as_str()).into());
        }
        if let Some(datatype) = caps.get(3) {
            let datatype = NamedNode::new(unmarshal_iri(datatype.as_str(), ns));
            return Ok(TypedLiteral::new(value, datatype).into());
        }
        return Ok(LocalizedLiteral::new(value, DEFAULT_LANGUAGE).into());
    }

    if IRI_OBJECT.is_match(token) {
        return Ok(NamedNode::new(unmarshal_iri(token, ns)).into());
    }

    warn!(token, "unmarshal: unrecognized object");
    Err(ParseError::MalformedObject(token.to_string()))
}

/// Absolute IRI for `a`, `<iri>` or `prefix:local`.
///
/// A prefixed name with an unknown prefix is kept verbatim.
fn unmarshal_iri(token: &str, ns: &Namespace) -> String {
    let token = token.trim();
    if token == "a" {
        return RDF_TYPE.to_string();
    }
    if let Some(iri) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return iri.to_string();
    }

    let mut parts = token.split(':');
    if let (Some(prefix), Some(local), None) = (parts.next(), parts.next(), parts.next()) {
        if let Some(stem) = ns.get(prefix) {
            return format!("{}#{}", stem, local);
        }
        debug!(token, "unknown prefix, keeping token as IRI");
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    fn parser() -> TurtleParser {
        TurtleParser::default()
    }

    fn sample_statements(dirk: &str) -> Vec<Statement> {
        let g = Some(NamedNode::new("http://www.test.de/test"));
        let n = |local: &str| NamedNode::new(format!("http://www.test.de/test#{}", local));
        let (u1, u2) = (n("User1"), n("User2"));
        let (has_ln, has_fn, says) = (n("hasLastName"), n("hasFirstName"), n("says"));

        vec![
            Statement::new(u1.clone(), has_ln.clone(), n("Mustermann"), g.clone()),
            Statement::new(u1.clone(), has_fn.clone(), n("Max"), g.clone()),
            Statement::new(u1.clone(), has_fn, NamedNode::new(dirk), g.clone()),
            Statement::new(
                u1.clone(),
                says.clone(),
                LocalizedLiteral::new("my tet \"aiaiai", "en"),
                g.clone(),
            ),
            Statement::new(
                u1,
                says,
                TypedLiteral::new("ui a string value", NamedNode::new(XSD_STRING)),
                g.clone(),
            ),
            Statement::new(u2, has_ln, n("Mustermann"), g),
        ]
    }

    #[test]
    fn test_marshal_node() {
        let p = parser();
        let sub = TurtleParser::new(TurtleOptions::new().with_substitute(true));
        let ns = Namespace::new();

        let plain = Node::from(NamedNode::new("http://www.test.de/test"));
        let xsd: Node = NamedNode::new(XSD_STRING).into();
        let rdf_type: Node = NamedNode::new(RDF_TYPE).into();

        assert_eq!(p.marshal_node(&plain, &ns), "<http://www.test.de/test>");
        assert_eq!(sub.marshal_node(&plain, &ns), "<http://www.test.de/test>");
        assert_eq!(p.marshal_node(&xsd, &ns), format!("<{}>", XSD_STRING));
        assert_eq!(sub.marshal_node(&xsd, &ns), "xsd:string");
        assert_eq!(sub.marshal_node(&rdf_type, &ns), "a");
        assert_eq!(p.marshal_node(&rdf_type, &ns), format!("<{}>", RDF_TYPE));

        let quoted: Node = LocalizedLiteral::new("hy my name is \"Paul\"", "de").into();
        assert_eq!(p.marshal_node(&quoted, &ns), r#""hy my name is \"Paul\""@de"#);
        let no_lang: Node = LocalizedLiteral::new("ohh", "").into();
        assert_eq!(p.marshal_node(&no_lang, &ns), r#""ohh"@default"#);

        let typed: Node = TypedLiteral::new("1", NamedNode::new("http://www.test.de/test")).into();
        assert_eq!(sub.marshal_node(&typed, &ns), r#""1"^^<http://www.test.de/test>"#);
        let typed: Node = TypedLiteral::new("2", NamedNode::new(XSD_STRING)).into();
        assert_eq!(sub.marshal_node(&typed, &ns), r#""2"^^xsd:string"#);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), r#""plain""#);
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r#"already \"done\""#), r#""already \"done\"""#);
        assert_eq!(quote(r#""""#), r#""\"\"""#);
    }

    #[test]
    fn test_unmarshal_node() {
        let ns = Namespace::new();

        assert_eq!(
            unmarshal_node("<http://www.test.de/test>", &ns).unwrap(),
            NamedNode::new("http://www.test.de/test").into()
        );
        assert_eq!(
            unmarshal_node("xsd:string", &ns).unwrap(),
            NamedNode::new(XSD_STRING).into()
        );
        assert_eq!(
            unmarshal_node(r#""mys\"astring""#, &ns).unwrap(),
            LocalizedLiteral::new(r#"mys\"astring"#, DEFAULT_LANGUAGE).into()
        );
        assert_eq!(
            unmarshal_node(r#""myst\"@ ,ring"@de"#, &ns).unwrap(),
            LocalizedLiteral::new(r#"myst\"@ ,ring"#, "de").into()
        );
        assert_eq!(
            unmarshal_node(r#""mystring"^^<http://www.w3.org/2001/XMLSchema#string>"#, &ns)
                .unwrap(),
            TypedLiteral::new("mystring", NamedNode::new(XSD_STRING)).into()
        );
        assert_eq!(
            unmarshal_node(r#""mystring"^^xsd:string"#, &ns).unwrap(),
            TypedLiteral::new("mystring", NamedNode::new(XSD_STRING)).into()
        );
        assert_eq!(
            unmarshal_node(
                r#""http://myresources:80/resources/file.py"^^<http://www.w3.org/2001/XMLSchema#anyURI>"#,
                &ns
            )
            .unwrap(),
            TypedLiteral::new(
                "http://myresources:80/resources/file.py",
                NamedNode::new("http://www.w3.org/2001/XMLSchema#anyURI")
            )
            .into()
        );
    }

    #[test]
    fn test_unmarshal_node_malformed() {
        let ns = Namespace::new();
        assert_eq!(
            unmarshal_node("justaword", &ns),
            Err(ParseError::MalformedObject("justaword".to_string()))
        );
        assert!(unmarshal_node(r#""unterminated"junk"#, &ns).is_err());
    }

    #[test]
    fn test_unmarshal_iri() {
        let mut ns = Namespace::new();
        ns.set("", "http://www.test.de/test");

        assert_eq!(unmarshal_iri("a", &ns), RDF_TYPE);
        assert_eq!(unmarshal_iri("<http://x/y>", &ns), "http://x/y");
        assert_eq!(unmarshal_iri(":User1", &ns), "http://www.test.de/test#User1");
        assert_eq!(unmarshal_iri("rdf:type", &ns), RDF_TYPE);
        assert_eq!(unmarshal_iri("nope:thing", &ns), "nope:thing");
        assert_eq!(unmarshal_iri("xsd:a:b", &ns), "xsd:a:b");
    }

    #[test]
    fn test_strip_comments() {
        let valid = "@prefix : <http://www.test.de/test#> . @base <http://www.test.de/test> .
\t\t\t# http://www.test.de/test#User1
\t\t\t:User1  :hasFirstName :Max .
\t\t\t# http://www.test.de/test#User1
\t\t\t:User1  :hasFirstName :Max .";
        let expect = "@prefix : <http://www.test.de/test#> . @base <http://www.test.de/test> .
\t\t\t:User1  :hasFirstName :Max .
\t\t\t:User1  :hasFirstName :Max .";

        assert_eq!(COMMENT_LINE.replace_all(valid, ""), expect);
    }

    #[test]
    fn test_extract_namespace() {
        let valid = "@prefix : <http://www.test.de/test#> . @base <http://www.test.de/test> .
\t\t\t@prefix abc: <http://www.test.de/abc#> .@prefix def: <http://www.test.de/def#> .
\t\t\t:User1  :hasFirstName :Max .";

        let ns = extract_namespace(valid);
        assert_eq!(ns.len(), 3);
        assert_eq!(ns.get(""), Some("http://www.test.de/test"));
        assert_eq!(ns.get("abc"), Some("http://www.test.de/abc"));
        assert_eq!(ns.get("def"), Some("http://www.test.de/def"));
    }

    #[test]
    fn test_split_clauses() {
        let body = r#":User1 :hasFirstName :Max ; :hasLastName :Peter, :Dirk . <http://www.test.de/test#> rdfs:label "ta . da.s\""@de . :User2 :hasFirstName :Other ."#;
        let clauses: Vec<&str> = split_top_level(body, '.', ends_clause)
            .into_iter()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        assert_eq!(
            clauses,
            vec![
                ":User1 :hasFirstName :Max ; :hasLastName :Peter, :Dirk",
                r#"<http://www.test.de/test#> rdfs:label "ta . da.s\""@de"#,
                ":User2 :hasFirstName :Other",
            ]
        );
    }

    #[test]
    fn test_split_compact_clauses() {
        let body = ":a :p :b .:c :p :d .<e> :p ex:f.g:h :p :i .";
        let clauses: Vec<&str> = split_top_level(body, '.', ends_clause)
            .into_iter()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        assert_eq!(
            clauses,
            vec![":a :p :b", ":c :p :d", "<e> :p ex:f", "g:h :p :i"]
        );

        // a dot inside a local name is not a boundary
        assert!(!ends_clause("1 :p :q ."));
        assert!(ends_clause(":c :p :d ."));
        assert!(ends_clause("ex:c :p :d ."));
    }

    #[test]
    fn test_unmarshal_compact_clauses() {
        let stmts = parser()
            .unmarshal("@prefix : <http://t#> .@base <http://t> .\n:a :p :b .:c :p :d .")
            .unwrap();

        let graph = Some("http://t".into());
        assert_eq!(
            stmts,
            vec![
                Statement::new(
                    "http://t#a".into(),
                    "http://t#p".into(),
                    NamedNode::new("http://t#b"),
                    graph.clone(),
                ),
                Statement::new(
                    "http://t#c".into(),
                    "http://t#p".into(),
                    NamedNode::new("http://t#d"),
                    graph,
                ),
            ]
        );
    }

    #[test]
    fn test_split_groups() {
        let groups: Vec<&str> =
            split_top_level(":hasFirstName :Max ; :hasLastName :Peter, :Dirk", ';', |_| true)
                .into_iter()
                .map(str::trim)
                .collect();
        assert_eq!(groups, vec![":hasFirstName :Max", ":hasLastName :Peter, :Dirk"]);
    }

    #[test]
    fn test_extract_objects() {
        let valid = r#"<myuri#asds> , "wrds", "", ""@de ,"sdasds"@de, "sda\"@dasd , sds"@de , :Testx, sdas:Test, "sdasds"^^xsd:string, "sdasds"^^<http://jdsj/asds#sads>,"http://localhost:80/resoures/mine.py"^^<http://www.w3.org/2001/XMLSchema#anyURI>"#;
        let expect = vec![
            r#""wrds""#,
            r#""""#,
            r#"""@de"#,
            r#""sdasds"@de"#,
            r#""sda\"@dasd , sds"@de"#,
            r#""sdasds"^^xsd:string"#,
            r#""sdasds"^^<http://jdsj/asds#sads>"#,
            r#""http://localhost:80/resoures/mine.py"^^<http://www.w3.org/2001/XMLSchema#anyURI>"#,
            "<myuri#asds>",
            ":Testx",
            "sdas:Test",
        ];
        assert_eq!(extract_objects(valid), expect);
    }

    #[test]
    fn test_marshal() {
        let expect = r#"@base <http://www.test.de/test> .
<http://www.test.de/test#User1> <http://www.test.de/test#hasFirstName> <http://www.test.de/test#Dirk> , <http://www.test.de/test#Max> ; <http://www.test.de/test#hasLastName> <http://www.test.de/test#Mustermann> ; <http://www.test.de/test#says> "my tet \"aiaiai"@en , "ui a string value"^^<http://www.w3.org/2001/XMLSchema#string> .
<http://www.test.de/test#User2> <http://www.test.de/test#hasLastName> <http://www.test.de/test#Mustermann> .
"#;
        let ttl = parser()
            .marshal(&sample_statements("http://www.test.de/test#Dirk"))
            .unwrap();
        assert_eq!(ttl, expect);
    }

    #[test]
    fn test_marshal_with_options() {
        // every token is followed by a space, hence the trailing blanks
        let expect = concat!(
            "@base <http://www.test.de/test> .\n",
            "@prefix : <http://www.test.de/test#> .\n",
            "@prefix bd: <http://www.bigdata.com/rdf#> .\n",
            "@prefix bds: <http://www.bigdata.com/rdf/search#> .\n",
            "@prefix dc: <http://purl.org/dc/elements/1.1#> .\n",
            "@prefix fn: <http://www.w3.org/2005/xpath-functions#> .\n",
            "@prefix foaf: <http://xmlns.com/foaf/0.1#> .\n",
            "@prefix hint: <http://www.bigdata.com/queryHints#> .\n",
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n",
            "@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n",
            "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n",
            "@prefix sesame: <http://www.openrdf.org/schema/sesame#> .\n",
            "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n",
            "\n",
            "# http://www.test.de/test#User1\n",
            ":User1 \n",
            "    :hasFirstName \n",
            "        :Max , \n",
            "        <http://www.test.de/test-unsub#Dirk> ; \n",
            "    :hasLastName \n",
            "        :Mustermann ; \n",
            "    :says \n",
            "        \"my tet \\\"aiaiai\"@en , \n",
            "        \"ui a string value\"^^xsd:string .\n",
            "\n",
            "# http://www.test.de/test#User2\n",
            ":User2 \n",
            "    :hasLastName \n",
            "        :Mustermann .\n",
        );
        let p = TurtleParser::new(
            TurtleOptions::new()
                .with_substitute(true)
                .with_pretty_print(true),
        );
        let ttl = p
            .marshal(&sample_statements("http://www.test.de/test-unsub#Dirk"))
            .unwrap();
        assert_eq!(ttl, expect);
    }

    #[test]
    fn test_marshal_mixed_graphs_has_no_base() {
        let stmts = vec![
            Statement::new("s".into(), "p".into(), NamedNode::new("o"), Some("g1".into())),
            Statement::new("s".into(), "p".into(), NamedNode::new("o2"), Some("g2".into())),
        ];
        assert_eq!(parser().marshal(&stmts).unwrap(), "<s> <p> <o> , <o2> .\n");
    }

    #[test]
    fn test_marshal_caller_namespace_wins() {
        let mut ns = Namespace::empty();
        ns.set("x", "http://www.w3.org/2001/XMLSchema");
        ns.set("xsd", "http://example.org/not-xsd");
        let p = TurtleParser::new(TurtleOptions::new().with_substitute(true).with_namespace(ns));

        let stmts = vec![Statement::new(
            "http://example.org/not-xsd#s".into(),
            "http://www.w3.org/2001/XMLSchema#p".into(),
            NamedNode::new("o"),
            None,
        )];
        let ttl = p.marshal(&stmts).unwrap();
        assert!(ttl.contains("@prefix xsd: <http://example.org/not-xsd#> .\n"));
        assert!(ttl.ends_with("xsd:s x:p <o> .\n"));
    }

    #[test]
    fn test_marshal_empty() {
        assert_eq!(parser().marshal(&[]).unwrap(), "");
    }

    #[test]
    fn test_unmarshal() {
        let ttl = r#"@base <http://www.test.de/test> .
				<http://www.test.de/test#User1>
					<http://www.test.de/test#hasFirstName> <http://www.test.de/test#Dirk> , <http://www.test.de/test#Max> ;
					<http://www.test.de/test#hasLastName> <http://www.test.de/test#Mustermann> ;
					<http://www.test.de/test#says> "my tet \"aiaiai"@en , "ui a string value"^^<http://www.w3.org/2001/XMLSchema#string> .
				<http://www.test.de/test#User2>
					<http://www.test.de/test#hasLastName> <http://www.test.de/test#Mustermann> ;<http://www.test.de/test#owns> "http://localhost:80/resoures/mine.py"^^<http://www.w3.org/2001/XMLSchema#anyURI> .
				:User1 a :Thing ."#;

        let stmts = parser().unmarshal(ttl).unwrap();
        assert_eq!(stmts.len(), 8);

        let graph = NamedNode::new("http://www.test.de/test");
        assert!(stmts.iter().all(|s| s.graph() == Some(&graph)));

        let last = &stmts[7];
        assert_eq!(last.subject().iri(), "http://www.test.de/test#User1");
        assert_eq!(last.predicate().iri(), RDF_TYPE);
        assert_eq!(last.object(), &Node::from(NamedNode::new("http://www.test.de/test#Thing")));

        // escaped quotes are kept verbatim
        assert!(stmts.iter().any(|s| s.object()
            == &Node::from(LocalizedLiteral::new(r#"my tet \"aiaiai"#, "en"))));
    }

    #[test]
    fn test_unmarshal_prefixed_with_base() {
        let stmts = parser()
            .unmarshal("@prefix : <http://t#> .@base <http://t> .\n:User1 :knows :User2 .")
            .unwrap();

        assert_eq!(
            stmts,
            vec![Statement::new(
                "http://t#User1".into(),
                "http://t#knows".into(),
                NamedNode::new("http://t#User2"),
                Some("http://t".into()),
            )]
        );
    }

    #[test]
    fn test_unmarshal_deduplicates() {
        let stmts = parser()
            .unmarshal("<s> <p> <o> , <o> .\n<s> <p> <o> .")
            .unwrap();
        assert_eq!(stmts.len(), 1);
        assert!(stmts[0].graph().is_none());
    }

    #[test]
    fn test_unmarshal_literal_before_iri_order() {
        let stmts = parser().unmarshal(r#"<s> <p> <o> , "lit" ."#).unwrap();
        assert_eq!(stmts[0].object(), &Node::from(LocalizedLiteral::new("lit", "")));
        assert_eq!(stmts[1].object(), &Node::from(NamedNode::new("o")));
    }

    #[test]
    fn test_base_iri_resolution() {
        let valid = "@prefix : <http://www.test.de/test#> .@base <http://www.test.de/test> .
\t\t\t# http://www.test.de/test#User1
\t\t\t:User1  :hasFirstName :Max .";
        let no_base_full = "@prefix : <http://www.test.de/test#> .
\t\t\t<http://www.test.de/test#User1>  <http://www.test.de/test#hasFirstName> <http://www.test.de/test#Max> .";
        let no_base_sub = "@prefix : <http://www.test.de/test#> .
\t\t\t# http://www.test.de/test#User1
\t\t\t:User1  :hasFirstName :Max .";
        let ambiguous = "@prefix : <http://www.test.de/test#> .@base <http://www.test.de/test> .
\t\t\t@base <http://www.test.de/test> .
\t\t\t# http://www.test.de/test#User1
\t\t\t:User1  :hasFirstName :Max .";

        let required = TurtleParser::new(TurtleOptions::new().with_require_base_iri(true));
        let with_fallback = TurtleParser::new(
            TurtleOptions::new()
                .with_require_base_iri(true)
                .with_fallback_to_first_subject(true),
        );

        let stmts = required.unmarshal(valid).unwrap();
        assert_eq!(stmts[0].graph(), Some(&NamedNode::new("http://www.test.de/test")));

        assert_eq!(
            required.unmarshal(ambiguous),
            Err(ParseError::AmbiguousBaseDirective(2))
        );
        assert_eq!(
            required.unmarshal(no_base_full),
            Err(ParseError::MissingBaseDirective)
        );

        for text in [no_base_full, no_base_sub] {
            let stmts = with_fallback.unmarshal(text).unwrap();
            assert_eq!(stmts.len(), 1);
            assert_eq!(
                stmts[0].graph(),
                Some(&NamedNode::new("http://www.test.de/test#User1"))
            );
        }

        assert_eq!(
            with_fallback.unmarshal("# nothing here\n"),
            Err(ParseError::NoSubjectForBaseIri)
        );
    }

    #[test]
    fn test_commented_directives_are_ignored() {
        let text = "# @base <http://old> .\n# @prefix old: <http://old#> .\n@base <http://t> .\n<s> <p> old:o .";
        let stmts = parser().unmarshal(text).unwrap();

        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].graph(), Some(&NamedNode::new("http://t")));
        assert_eq!(stmts[0].object(), &Node::from(NamedNode::new("old:o")));
    }

    #[test]
    fn test_unmarshal_without_base_is_unscoped() {
        let stmts = parser().unmarshal("<a> <b> <c> .").unwrap();
        assert_eq!(stmts.len(), 1);
        assert!(stmts[0].graph().is_none());
    }

    #[test]
    fn test_unmarshal_malformed() {
        assert!(matches!(
            parser().unmarshal("\"lit\" <p> <o> ."),
            Err(ParseError::MalformedClause(_))
        ));
        assert!(matches!(
            parser().unmarshal("<s> <p> <o> ; \"x\" ."),
            Err(ParseError::MalformedClause(_))
        ));
        assert_eq!(
            parser().unmarshal("<s> <p> bareword ."),
            Err(ParseError::MalformedObject("bareword".to_string()))
        );
    }

    #[test]
    fn test_unmarshal_empty() {
        assert_eq!(parser().unmarshal("").unwrap(), vec![]);
        assert_eq!(parser().unmarshal("# only a comment").unwrap(), vec![]);
    }

    #[test]
    fn test_pretty_round_trip() {
        let stmts = vec![
            Statement::new(
                "http://x/test#a".into(),
                RDF_TYPE.into(),
                NamedNode::new("http://x/test#Thing"),
                Some("http://x/test".into()),
            ),
            Statement::new(
                "http://x/test#a".into(),
                "http://xmlns.com/foaf/0.1#name".into(),
                TypedLiteral::new("A", NamedNode::new(XSD_STRING)),
                Some("http://x/test".into()),
            ),
        ];
        let p = TurtleParser::new(
            TurtleOptions::new()
                .with_substitute(true)
                .with_pretty_print(true),
        );

        let ttl = p.marshal(&stmts).unwrap();
        assert!(ttl.contains(":a \n    a \n        :Thing"));

        let back = p.unmarshal(&ttl).unwrap();
        assert_eq!(back.len(), stmts.len());
        assert!(stmts.iter().all(|s| back.contains(s)));
    }
}
