use std::fmt::Write as _;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["meta", "link", "img", "br", "input", "source"];

/// One markup node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// `<!DOCTYPE html>`.
    Doctype,
    /// Element with attributes and children.
    Element(Element),
    /// Escaped text.
    Text(String),
    /// Verbatim text for `<script>`/`<style>` bodies.
    Raw(String),
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

/// Markup element. Attributes keep insertion order so output is reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a valueless attribute (serialized as `name`).
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    /// Append a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children.
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append escaped text.
    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }

    /// Append verbatim text.
    pub fn raw(self, s: impl Into<String>) -> Self {
        self.child(Node::Raw(s.into()))
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct element children.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// All descendant elements (not including `self`) matching `pred`, in document order.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_matching(pred, &mut out);
        out
    }

    fn collect_matching<'a>(
        &'a self,
        pred: impl Fn(&Element) -> bool + Copy,
        out: &mut Vec<&'a Element>,
    ) {
        for c in self.child_elements() {
            if pred(c) {
                out.push(c);
            }
            c.collect_matching(pred, out);
        }
    }
}

/// A complete markup document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Top-level nodes (doctype, then `<html>`).
    pub nodes: Vec<Node>,
}

impl Document {
    /// The `<html>` root element.
    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// All elements matching `pred`, in document order.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        if pred(root) {
            out.push(root);
        }
        out.extend(root.find_all(pred));
        out
    }

    /// Serialize to text: two-space indentation, one element per line, `\n` line endings.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(8 * 1024);
        for n in &self.nodes {
            write_node(&mut out, n, 0);
        }
        out
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Doctype => out.push_str("<!DOCTYPE html>\n"),
        Node::Text(t) => {
            indent(out, depth);
            out.push_str(&escape_text(t));
            out.push('\n');
        }
        Node::Raw(r) => {
            for line in r.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    indent(out, depth);
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        Node::Element(e) => write_element(out, e, depth),
    }
}

fn write_element(out: &mut String, e: &Element, depth: usize) {
    indent(out, depth);
    out.push('<');
    out.push_str(&e.tag);
    for (k, v) in &e.attrs {
        if v.is_empty() {
            let _ = write!(out, " {k}");
        } else {
            let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&e.tag.as_str()) {
        out.push('\n');
        return;
    }

    match e.children.as_slice() {
        [] => {}
        [Node::Text(t)] => out.push_str(&escape_text(t)),
        children => {
            out.push('\n');
            for c in children {
                write_node(out, c, depth + 1);
            }
            indent(out, depth);
        }
    }
    let _ = writeln!(out, "</{}>", e.tag);
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

pub(crate) fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/node.rs"]
mod tests;
