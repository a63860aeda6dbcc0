//! Recovers the entity catalogue from the reference page.
//!
//! The page has no machine-readable schema. Entities are level-4 headings,
//! their description is the first paragraph after the heading and their
//! fields are the rows of the following table. The scan below is a small
//! state machine driven by those three kinds of node.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use telegen_schema::{Catalogue, EntityKind, Field, Type, OPTIONAL_MARKER};
use tracing::{debug, info};

use crate::{
    error::GenError,
    utils::one_line,
    walker::{anchor, find_all, parent, require, successors, text},
};

/// Anchor of the first section of the entity catalogue.
pub const CATALOGUE_ANCHOR: &str = "getting-updates";

/// Third-column value that marks a parameter as optional.
pub const OPTIONAL_COLUMN: &str = "Optional";

lazy_static! {
    static ref HEADING_ANCHOR: Selector = Selector::parse("a.anchor").unwrap();
    static ref TABLE_BODY:     Selector = Selector::parse("tbody").unwrap();
    static ref TABLE_ROW:      Selector = Selector::parse("tr").unwrap();
    static ref TABLE_CELL:     Selector = Selector::parse("td").unwrap();
}

/// What a node means to the scan.
enum Event<'a> {
    Section(ElementRef<'a>),
    Heading(ElementRef<'a>),
    Paragraph(ElementRef<'a>),
    Table(ElementRef<'a>),
    Ignored,
}

impl<'a> Event<'a> {
    fn of(node: ElementRef<'a>) -> Self {
        match node.value().name() {
            "h3"    => Event::Section(node),
            "h4"    => Event::Heading(node),
            "p"     => Event::Paragraph(node),
            "table" => Event::Table(node),
            _       => Event::Ignored,
        }
    }
}

/// Which entity, if any, paragraphs and tables currently belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    BuildingDefinition(usize),
    BuildingOperation(usize),
}

struct Scan<'s> {
    source_url: &'s str,
    catalogue:  Catalogue,
    state:      State,
}

impl<'s> Scan<'s> {
    fn new(source_url: &'s str) -> Self {
        Scan {
            source_url,
            catalogue: Catalogue::default(),
            state:     State::Idle,
        }
    }

    fn current(&mut self) -> Option<&mut Type> {
        match self.state {
            State::Idle                      => None,
            State::BuildingDefinition(index) => self.catalogue.definitions.get_mut(index),
            State::BuildingOperation(index)  => self.catalogue.operations.get_mut(index),
        }
    }

    fn step(&mut self, event: Event<'_>) -> Result<(), GenError> {
        match event {
            Event::Section(node)   => {
                debug!("found section: {}", text(node));
                Ok(())
            }
            Event::Heading(node)   => self.on_heading(node),
            Event::Paragraph(node) => {
                self.on_paragraph(node);
                Ok(())
            }
            Event::Table(node)     => self.on_table(node),
            Event::Ignored         => Ok(()),
        }
    }

    fn on_heading(&mut self, node: ElementRef<'_>) -> Result<(), GenError> {
        self.state = State::Idle;
        let name = text(node);
        debug!("found heading: {}", name);

        if name.contains(' ') {
            debug!("skip title: {}", name);
            return Ok(());
        }
        let Some(kind) = EntityKind::classify(&name) else {
            debug!("skip heading without a name: {:?}", name);
            return Ok(());
        };

        let link = require(node, &HEADING_ANCHOR, "a.anchor", &format!("heading \"{}\"", name))?;
        let href = link.value().attr("href").unwrap_or("");
        let entity = Type::new(name, format!("{}{}", self.source_url, href));

        self.state = match kind {
            EntityKind::Definition => {
                debug!("found definition: {}", entity.name);
                self.catalogue.definitions.push(entity);
                State::BuildingDefinition(self.catalogue.definitions.len() - 1)
            }
            EntityKind::Operation => {
                debug!("found operation: {}", entity.name);
                self.catalogue.operations.push(entity);
                State::BuildingOperation(self.catalogue.operations.len() - 1)
            }
        };
        Ok(())
    }

    fn on_paragraph(&mut self, node: ElementRef<'_>) {
        if let Some(current) = self.current() {
            if current.description.is_empty() {
                current.description = one_line(&text(node));
                debug!("found description: {}", current.description);
            }
        }
    }

    fn on_table(&mut self, node: ElementRef<'_>) -> Result<(), GenError> {
        let Some(current) = self.current() else {
            return Ok(());
        };
        let context = format!("table under \"{}\"", current.name);
        let body = require(node, &TABLE_BODY, "tbody", &context)?;

        for (row, tr) in find_all(body, &TABLE_ROW).into_iter().enumerate() {
            let cells = find_all(tr, &TABLE_CELL);
            let field = field_from_cells(&cells).ok_or_else(|| GenError::MalformedRow {
                entity: current.name.clone(),
                row,
                cells: cells.len(),
            })?;
            current.fields.push(field);
        }
        debug!("found {} field(s) for {}", current.fields.len(), current.name);
        Ok(())
    }
}

/// Column 0 is the name, column 1 the type and the last column the
/// description. A four-column row whose third cell reads exactly
/// `Optional` gets the optional marker prepended to its description.
fn field_from_cells(cells: &[ElementRef<'_>]) -> Option<Field> {
    if cells.len() < 2 {
        return None;
    }
    let mut description = one_line(&text(*cells.last()?));
    if cells.len() == 4 && text(cells[2]) == OPTIONAL_COLUMN {
        description = format!("{} {}", OPTIONAL_MARKER, description);
    }
    Some(Field::new(text(cells[0]), text(cells[1]), description))
}

/// Walks the document from the catalogue anchor to the end and returns
/// operations and definitions in heading order. `source_url` prefixes every
/// heading's permalink fragment.
pub fn extract(document: &Html, source_url: &str) -> Result<Catalogue, GenError> {
    let marker = anchor(document, CATALOGUE_ANCHOR)?;
    let start = parent(marker).ok_or_else(|| GenError::MissingAnchor(CATALOGUE_ANCHOR.to_string()))?;

    let mut scan = Scan::new(source_url);
    for node in successors(start) {
        scan.step(Event::of(node))?;
    }

    info!(
        "extracted {} operation(s) and {} definition(s)",
        scan.catalogue.operations.len(),
        scan.catalogue.definitions.len()
    );
    Ok(scan.catalogue)
}
