//! Interpreter — walks a syntax tree and builds a [`Scene`].
//!
//! Basic sentences run strictly in source order and each one sees the
//! effects of the ones before it. The first semantic violation aborts the run
//! and the partially built scene is dropped.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::scene::{Canvas, Scene, Shape, ShapeKind, Value};

use super::ast::*;
use super::error::PaintError;

/// Interpret a parsed program into a scene.
pub fn interpret_program(input: &Input) -> Result<Scene, PaintError> {
    let mut interpreter = Interpreter::new();
    for sentence in &input.sentences {
        for basic in &sentence.basic_sentences {
            interpreter.basic_sentence(basic)?;
        }
    }

    let scene = interpreter.finish();
    debug!(shapes = scene.shapes.len(), "interpreted program");
    Ok(scene)
}

/// The object an implicit `its` target refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastUsed {
    Nothing,
    Canvas,
    Shape(usize),
}

/// The owner of an attribute being assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Canvas,
    Shape(usize),
}

impl From<Owner> for LastUsed {
    fn from(owner: Owner) -> Self {
        match owner {
            Owner::Canvas => LastUsed::Canvas,
            Owner::Shape(idx) => LastUsed::Shape(idx),
        }
    }
}

/// Run-scoped state: the canvas, the shapes in paint order with a
/// name-to-index lookup kept in step, and the last-used object.
struct Interpreter {
    canvas: Canvas,
    shapes: Vec<Shape>,
    index: HashMap<String, usize>,
    last_used: LastUsed,
}

impl Interpreter {
    fn new() -> Self {
        Self {
            canvas: Canvas::default(),
            shapes: Vec::new(),
            index: HashMap::new(),
            last_used: LastUsed::Nothing,
        }
    }

    fn finish(self) -> Scene {
        Scene {
            canvas: self.canvas,
            shapes: self.shapes,
        }
    }

    fn basic_sentence(&mut self, basic: &BasicSentence) -> Result<(), PaintError> {
        trace!(line = basic.token.line, "basic sentence");
        match &basic.kind {
            BasicSentenceKind::Shape { name, shape } => self.declare(name, shape),
            BasicSentenceKind::Order {
                first,
                order,
                second,
            } => self.reorder(first, order.kind, second),
            BasicSentenceKind::Value { target, value } => self.assign(target, value),
        }
    }

    fn declare(&mut self, name: &Name, shape: &Leaf<ShapeKind>) -> Result<(), PaintError> {
        if self.index.contains_key(name.as_str()) {
            return Err(PaintError::interpret(
                format!("Shape \"{}\" already exists!", name.as_str()),
                name.token.line,
            ));
        }

        let idx = self.shapes.len();
        self.shapes.push(Shape::new(shape.kind, name.as_str()));
        self.index.insert(name.as_str().to_string(), idx);
        self.last_used = LastUsed::Shape(idx);
        Ok(())
    }

    fn reorder(&mut self, first: &Name, order: OrderKind, second: &Name) -> Result<(), PaintError> {
        if first.as_str() == second.as_str() {
            return Err(PaintError::interpret(
                format!(
                    "Shape \"{}\" cannot be in front of or behind itself!",
                    first.as_str()
                ),
                first.token.line,
            ));
        }

        let from = self.lookup(first)?;
        let to = self.lookup(second)?;

        let misplaced = match order {
            OrderKind::Front => from < to,
            OrderKind::Behind => from > to,
        };

        let mut final_idx = from;
        if misplaced {
            // After removal, inserting at `to` lands just after `second` when
            // moving forward and just before it when moving back.
            let shape = self.shapes.remove(from);
            self.shapes.insert(to, shape);
            self.rebuild_index(from.min(to)..=from.max(to));
            final_idx = to;
            debug!(shape = first.as_str(), from, to, "reordered");
        }

        self.last_used = LastUsed::Shape(final_idx);
        Ok(())
    }

    fn assign(&mut self, target: &Target, value: &ValueNode) -> Result<(), PaintError> {
        let owner = match &target.kind {
            TargetKind::Attribute { object, .. } | TargetKind::AreaAttribute { object, .. } => {
                self.resolve_object(object)?
            }
            TargetKind::ImplicitAttribute { .. } | TargetKind::ImplicitAreaAttribute { .. } => {
                self.implicit_owner(target)?
            }
        };

        let attribute = target.kind.attribute();
        let on_border = target.kind.area().is_some();
        let resolved = resolve_value(value)?;

        let (slot, expected) = self
            .slot(owner, attribute.kind, on_border)
            .map_err(|message| PaintError::interpret(message, attribute.token.line))?;

        if resolved.dimension() != expected {
            return Err(PaintError::interpret(
                format!(
                    "{}{} must have dimension {expected}, got {} with dimension {}!",
                    if on_border { "border " } else { "" },
                    attribute.kind.as_str(),
                    resolved,
                    resolved.dimension()
                ),
                value.token.line,
            ));
        }

        *slot = resolved;
        self.last_used = owner.into();
        Ok(())
    }

    /// The value slot addressed by `attribute` on `owner` and the dimension
    /// it requires.
    fn slot(
        &mut self,
        owner: Owner,
        attribute: AttributeKind,
        on_border: bool,
    ) -> Result<(&mut Value, usize), String> {
        match (owner, attribute, on_border) {
            (_, AttributeKind::Position, true) => {
                Err("Invalid attribute for border: position!".to_string())
            }
            (Owner::Canvas, AttributeKind::Position, false) => {
                Err("Invalid attribute for canvas: position!".to_string())
            }
            (Owner::Canvas, AttributeKind::Size, false) => {
                Ok((&mut self.canvas.size, Canvas::SIZE_DIMENSION))
            }
            (Owner::Canvas, AttributeKind::Color, false) => Ok((&mut self.canvas.color, 3)),
            (Owner::Canvas, AttributeKind::Size, true) => Ok((&mut self.canvas.border_size, 1)),
            (Owner::Canvas, AttributeKind::Color, true) => Ok((&mut self.canvas.border_color, 3)),
            (Owner::Shape(idx), attribute, on_border) => {
                let shape = &mut self.shapes[idx];
                let slot = match (attribute, on_border) {
                    (AttributeKind::Position, _) => (&mut shape.position, 2),
                    (AttributeKind::Size, false) => {
                        let dimension = shape.kind.size_dimension();
                        (&mut shape.size, dimension)
                    }
                    (AttributeKind::Color, false) => (&mut shape.color, 3),
                    (AttributeKind::Size, true) => (&mut shape.border_size, 1),
                    (AttributeKind::Color, true) => (&mut shape.border_color, 3),
                };
                Ok(slot)
            }
        }
    }

    fn resolve_object(&self, object: &Object) -> Result<Owner, PaintError> {
        match &object.kind {
            ObjectKind::Canvas => Ok(Owner::Canvas),
            ObjectKind::Name(name) => self.lookup(name).map(Owner::Shape),
        }
    }

    fn implicit_owner(&self, target: &Target) -> Result<Owner, PaintError> {
        match self.last_used {
            LastUsed::Canvas => Ok(Owner::Canvas),
            LastUsed::Shape(idx) => Ok(Owner::Shape(idx)),
            LastUsed::Nothing => Err(PaintError::interpret(
                "There is no object to refer to with \"its\"!",
                target.token.line,
            )),
        }
    }

    fn lookup(&self, name: &Name) -> Result<usize, PaintError> {
        self.index.get(name.as_str()).copied().ok_or_else(|| {
            PaintError::interpret(
                format!("Shape \"{}\" doesn't exist!", name.as_str()),
                name.token.line,
            )
        })
    }

    fn rebuild_index(&mut self, range: std::ops::RangeInclusive<usize>) {
        for idx in range {
            self.index.insert(self.shapes[idx].name.clone(), idx);
        }
    }
}

fn resolve_value(value: &ValueNode) -> Result<Value, PaintError> {
    match &value.kind {
        ValueKind::Number(n) => Ok(Value::new(vec![resolve_number(n)?])),
        ValueKind::Tuple(ns) => ns
            .iter()
            .map(resolve_number)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::new),
        ValueKind::Color(color) => Ok(Value::from(color.kind.rgb())),
    }
}

fn resolve_number(number: &Number) -> Result<u32, PaintError> {
    number.token.text.parse().map_err(|_| {
        PaintError::interpret(
            format!("Number \"{}\" is too large!", number.token.text),
            number.token.line,
        )
    })
}
