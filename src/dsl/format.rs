//! Text forms of a syntax tree: an indented node dump and canonical source.

use std::fmt;

use crate::scene::ShapeKind;

use super::ast::*;

/// Re-serialize a tree as canonical program text.
///
/// Keywords come out lowercase and names verbatim; every sentence ends with
/// a period and a newline. Lexing the result yields the same token kinds as
/// the program the tree was parsed from.
pub fn to_source(input: &Input) -> String {
    let mut out = String::new();
    for sentence in &input.sentences {
        for (i, basic) in sentence.basic_sentences.iter().enumerate() {
            if i > 0 {
                out.push_str(" and ");
            }
            write_basic_sentence(&mut out, basic);
        }
        out.push_str(".\n");
    }
    out
}

fn write_basic_sentence(out: &mut String, basic: &BasicSentence) {
    match &basic.kind {
        BasicSentenceKind::Shape { name, shape } => {
            out.push_str(&format!("{} is {}", name.as_str(), shape_word(shape.kind)));
        }
        BasicSentenceKind::Order {
            first,
            order,
            second,
        } => {
            let order = match order.kind {
                OrderKind::Front => "in front of",
                OrderKind::Behind => "behind",
            };
            out.push_str(&format!("{} is {order} {}", first.as_str(), second.as_str()));
        }
        BasicSentenceKind::Value { target, value } => {
            write_target(out, &target.kind);
            out.push_str(" is ");
            write_value(out, &value.kind);
        }
    }
}

fn write_target(out: &mut String, target: &TargetKind) {
    let attribute = target.attribute().kind.as_str();
    let text = match target {
        TargetKind::Attribute { object, .. } => {
            format!("{attribute} of {}", object_word(object))
        }
        TargetKind::AreaAttribute { object, .. } => {
            format!("{attribute} of border of {}", object_word(object))
        }
        TargetKind::ImplicitAttribute { .. } => format!("its {attribute}"),
        TargetKind::ImplicitAreaAttribute { .. } => format!("{attribute} of its border"),
    };
    out.push_str(&text);
}

fn write_value(out: &mut String, value: &ValueKind) {
    match value {
        ValueKind::Number(n) => out.push_str(&n.token.text),
        ValueKind::Tuple(ns) => {
            let numbers: Vec<&str> = ns.iter().map(|n| n.token.text.as_str()).collect();
            out.push_str(&format!("({})", numbers.join(", ")));
        }
        ValueKind::Color(color) => out.push_str(color_word(color.kind)),
    }
}

fn object_word(object: &Object) -> &str {
    match &object.kind {
        ObjectKind::Name(name) => name.as_str(),
        ObjectKind::Canvas => "canvas",
    }
}

fn shape_word(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Circle => "circle",
        ShapeKind::Square => "square",
        ShapeKind::Ellipse => "ellipse",
        ShapeKind::Rectangle => "rectangle",
    }
}

fn color_word(kind: ColorKind) -> &'static str {
    match kind {
        ColorKind::Red => "red",
        ColorKind::Blue => "blue",
        ColorKind::Green => "green",
        ColorKind::White => "white",
        ColorKind::Black => "black",
    }
}

/// Writes one node per line, indented two spaces per level.
struct TreeWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    depth: usize,
}

impl TreeWriter<'_, '_> {
    fn node(&mut self, label: fmt::Arguments<'_>) -> fmt::Result {
        writeln!(self.f, "{:indent$}{label}", "", indent = self.depth * 2)
    }

    fn nested(&mut self, body: impl FnOnce(&mut Self) -> fmt::Result) -> fmt::Result {
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    fn name(&mut self, name: &Name) -> fmt::Result {
        self.node(format_args!("Name \"{}\"", name.as_str()))
    }

    fn attribute(&mut self, attribute: &Leaf<AttributeKind>) -> fmt::Result {
        self.node(format_args!("Attribute {:?}", attribute.kind))
    }

    fn area(&mut self, area: &Leaf<AreaKind>) -> fmt::Result {
        self.node(format_args!("Area {:?}", area.kind))
    }

    fn object(&mut self, object: &Object) -> fmt::Result {
        self.node(format_args!("Object"))?;
        self.nested(|w| match &object.kind {
            ObjectKind::Name(name) => w.name(name),
            ObjectKind::Canvas => w.node(format_args!("Canvas")),
        })
    }

    fn target(&mut self, target: &Target) -> fmt::Result {
        let label = match &target.kind {
            TargetKind::Attribute { .. } => "AttributeTarget",
            TargetKind::AreaAttribute { .. } => "AreaAttributeTarget",
            TargetKind::ImplicitAttribute { .. } => "ImplicitAttributeTarget",
            TargetKind::ImplicitAreaAttribute { .. } => "ImplicitAreaAttributeTarget",
        };
        self.node(format_args!("{label}"))?;
        self.nested(|w| {
            w.attribute(target.kind.attribute())?;
            if let Some(area) = target.kind.area() {
                w.area(area)?;
            }
            match &target.kind {
                TargetKind::Attribute { object, .. } | TargetKind::AreaAttribute { object, .. } => {
                    w.object(object)
                }
                _ => Ok(()),
            }
        })
    }

    fn value(&mut self, value: &ValueNode) -> fmt::Result {
        self.node(format_args!("Value"))?;
        self.nested(|w| match &value.kind {
            ValueKind::Number(n) => w.node(format_args!("Number {}", n.token.text)),
            ValueKind::Tuple(ns) => {
                w.node(format_args!("Tuple"))?;
                w.nested(|w| {
                    for n in ns {
                        w.node(format_args!("Number {}", n.token.text))?;
                    }
                    Ok(())
                })
            }
            ValueKind::Color(color) => w.node(format_args!("Color {:?}", color.kind)),
        })
    }

    fn basic_sentence(&mut self, basic: &BasicSentence) -> fmt::Result {
        match &basic.kind {
            BasicSentenceKind::Shape { name, shape } => {
                self.node(format_args!("ShapeSentence"))?;
                self.nested(|w| {
                    w.name(name)?;
                    w.node(format_args!("Shape {:?}", shape.kind))
                })
            }
            BasicSentenceKind::Order {
                first,
                order,
                second,
            } => {
                self.node(format_args!("OrderSentence"))?;
                self.nested(|w| {
                    w.name(first)?;
                    w.node(format_args!("Order {:?}", order.kind))?;
                    w.name(second)
                })
            }
            BasicSentenceKind::Value { target, value } => {
                self.node(format_args!("ValueSentence"))?;
                self.nested(|w| {
                    w.target(target)?;
                    w.value(value)
                })
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TreeWriter { f, depth: 0 };
        w.node(format_args!("Input"))?;
        w.nested(|w| {
            for sentence in &self.sentences {
                w.node(format_args!("Sentence"))?;
                w.nested(|w| {
                    for basic in &sentence.basic_sentences {
                        w.basic_sentence(basic)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}
