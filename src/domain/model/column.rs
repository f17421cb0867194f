use indexmap::IndexMap;
use serde_json::Value;

/// One table cell. `Empty` is the absent-field placeholder and `Null` an
/// explicit null; both render as an empty CSV field, but the two stay
/// distinct so a defaulted cell can be told apart from a present null.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Json(Value),
}

impl Cell {
    /// Scalars stay scalar; arrays and objects pass through untouched.
    pub fn from_value(value: &Value) -> Cell {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Cell::Int(i)
                } else {
                    Cell::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => Cell::Str(s.clone()),
            other => Cell::Json(other.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// CSV field form.
    pub fn render(&self) -> String {
        match self {
            Cell::Empty | Cell::Null => String::new(),
            Cell::Bool(b) => b.to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Str(s) => s.clone(),
            Cell::Json(v) => v.to_string(),
        }
    }

    /// Text content for downstream text processing; empty for non-strings.
    pub fn as_text(&self) -> &str {
        match self {
            Cell::Str(s) => s,
            _ => "",
        }
    }
}

/// One named, row-aligned derived sequence. `Degraded` is the whole-column
/// placeholder produced when the record set is structurally unusable for a
/// projection; keeping it a separate variant lets callers tell which
/// defaulting policy fired.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    PerRow(Vec<Cell>),
    Degraded(Cell),
}

impl Column {
    pub fn per_row(cells: Vec<Cell>) -> Column {
        Column::PerRow(cells)
    }

    pub fn degraded() -> Column {
        Column::Degraded(Cell::Empty)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Column::Degraded(_))
    }

    /// Rows this column contributes to a positional zip. A degraded column
    /// contributes none.
    pub fn len(&self) -> usize {
        match self {
            Column::PerRow(cells) => cells.len(),
            Column::Degraded(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell(&self, row: usize) -> Option<&Cell> {
        match self {
            Column::PerRow(cells) => cells.get(row),
            Column::Degraded(_) => None,
        }
    }
}

/// The assembled output: named columns in a fixed order sharing one row
/// index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: IndexMap<String, Column>,
}

impl Table {
    pub fn new() -> Table {
        Table::default()
    }

    pub fn insert(&mut self, name: &str, column: Column) {
        self.columns.insert(name.to_string(), column);
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Zip semantics: the shortest column bounds the row count.
    pub fn n_rows(&self) -> usize {
        self.columns.values().map(Column::len).min().unwrap_or(0)
    }

    /// Positional rows, cells in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.n_rows()).map(move |row| {
            self.columns
                .values()
                .filter_map(move |column| column.cell(row))
                .collect()
        })
    }
}
