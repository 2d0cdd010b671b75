mod flat;

pub use flat::FlatFileWriter;

use std::fmt::Display;

use crate::{
    config::{GeneratorParams, Id},
    picture::{IdCounters, Pair, Picture},
    shape::ShapeKind,
    Error, Result,
};

/// One flat file of a fold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Element,
    Circle,
    Rectangle,
    Triangle,
    TriangleUp,
    TriangleDown,
    Inside,
    East,
    North,
}
impl Table {
    pub const ALL: [Table; 9] = [
        Table::Element,
        Table::Circle,
        Table::Rectangle,
        Table::Triangle,
        Table::TriangleUp,
        Table::TriangleDown,
        Table::Inside,
        Table::East,
        Table::North,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Table::Element => "element",
            Table::Circle => "circle",
            Table::Rectangle => "rectangle",
            Table::Triangle => "triangle",
            Table::TriangleUp => "triangle_up",
            Table::TriangleDown => "triangle_down",
            Table::Inside => "inside",
            Table::East => "east",
            Table::North => "north",
        }
    }

    /// Tables listing the id of a shape of `kind`
    pub fn for_kind(kind: ShapeKind) -> &'static [Table] {
        match kind {
            ShapeKind::Square => &[Table::Rectangle],
            ShapeKind::Circle => &[Table::Circle],
            ShapeKind::TriangleUp => &[Table::Triangle, Table::TriangleUp],
            ShapeKind::TriangleDown => &[Table::Triangle, Table::TriangleDown],
        }
    }
}
impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Render every row a picture contributes, in file order.
///
/// Fails if the picture or any of its shapes has no id yet.
pub fn picture_rows(picture: &Picture) -> Result<Vec<(Table, String)>> {
    let pid = picture
        .id()
        .ok_or_else(|| Error::UnassignedId(String::from("picture")))?;
    let shape_ids = picture
        .shapes()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            s.id()
                .ok_or_else(|| Error::UnassignedId(format!("shape {} of picture {}", i, pid)))
        })
        .collect::<Result<Vec<Id>>>()?;

    let mut rows = Vec::new();
    for (shape, id) in picture.shapes().iter().zip(shape_ids.iter()) {
        rows.push((Table::Element, format!("{}|{}", pid, id)));
        for &table in Table::for_kind(shape.kind()) {
            rows.push((table, id.to_string()));
        }
    }

    let pair_rows = |table: Table, pairs: &[Pair]| {
        pairs
            .iter()
            .map(|&(a, b)| (table, format!("{}|{}", shape_ids[a], shape_ids[b])))
            .collect::<Vec<_>>()
    };
    rows.extend(pair_rows(Table::Inside, picture.inside()));
    rows.extend(pair_rows(Table::North, picture.north()));
    rows.extend(pair_rows(Table::East, picture.east()));
    Ok(rows)
}

/// Content of a fold's `summary` file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub params: GeneratorParams,
    /// Counters after the fold, i.e. the next ids to be issued
    pub ids: IdCounters,
}
impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#elements: [{}, {}]; #size: [{}, {}]; #min_insides: {}; max_pid: {} max_eid: {}",
            self.params.min_elements,
            self.params.max_elements,
            self.params.min_size,
            self.params.max_size,
            self.params.min_insides,
            self.ids.picture,
            self.ids.shape,
        )
    }
}

/// Destination of finished folds
pub trait ChunkSink {
    fn write_chunk(&mut self, fold: usize, pictures: &[Picture], summary: &Summary) -> Result<()>;
}
