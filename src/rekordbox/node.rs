//! Scoped XML node writing
//!
//! Every opened node is closed exactly once: explicitly through
//! `Node::close`, or when the node goes out of scope on an error path.

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fmt::Display;
use std::io::Write;

/// An element about to be written
///
/// Attributes with an empty value are left out. Values are escaped when
/// they are added.
pub struct Element {
    name: &'static str,
    start: BytesStart<'static>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: BytesStart::new(name),
        }
    }

    pub fn attr(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.start.push_attribute((key, value.as_str()));
        }
        self
    }

    /// Add an attribute only if there is a value
    pub fn opt_attr<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }
}

/// Sequential XML document writer
pub struct TreeWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> TreeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            xml: Writer::new(sink),
        }
    }

    /// Write the `<?xml ...?>` header
    pub fn declaration(&mut self) -> Result<()> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Open the document's root node
    pub fn open(&mut self, element: Element) -> Result<Node<'_, W>> {
        open_node(&mut self.xml, element)
    }

    pub fn into_inner(self) -> W {
        self.xml.into_inner()
    }
}

fn open_node<W: Write>(xml: &mut Writer<W>, element: Element) -> Result<Node<'_, W>> {
    xml.write_event(Event::Start(element.start))?;
    Ok(Node {
        xml,
        name: element.name,
        open: true,
    })
}

/// An open XML node
pub struct Node<'w, W: Write> {
    xml: &'w mut Writer<W>,
    name: &'static str,
    open: bool,
}

impl<W: Write> Node<'_, W> {
    /// Open a child node; it must be closed before this node can be used again
    pub fn child(&mut self, element: Element) -> Result<Node<'_, W>> {
        open_node(self.xml, element)
    }

    /// Write a child node without content
    pub fn leaf(&mut self, element: Element) -> Result<()> {
        self.xml.write_event(Event::Empty(element.start))?;
        Ok(())
    }

    pub fn close(mut self) -> Result<()> {
        self.open = false;
        self.xml.write_event(Event::End(BytesEnd::new(self.name)))?;
        Ok(())
    }
}

impl<W: Write> Drop for Node<'_, W> {
    fn drop(&mut self) {
        if self.open {
            // Already failing; a broken sink will fail here too
            let _ = self.xml.write_event(Event::End(BytesEnd::new(self.name)));
        }
    }
}
