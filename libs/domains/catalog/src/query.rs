//! Product listing query grammar.
//!
//! `GET /api/products` accepts comparison filters of the form
//! `filters[<field>][$<op>]=<value>` alongside `sort`, `page` and `mode` keys.
//! The raw query string is tokenized into percent-decoded key/value pairs in
//! their original order, folded into a typed [`ListingQuery`], and compiled
//! into a sea-orm condition plus ordering and pagination.
//!
//! The grammar is forgiving by contract: unknown keys, malformed bracket
//! nesting, unknown fields or operators, and numeric values that fail to parse
//! are all dropped rather than rejected. A later filter for a field replaces
//! an earlier one, so each field contributes at most one clause.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Order};

use crate::entity::product;

/// Fixed page size for the storefront listing
pub const PAGE_SIZE: u64 = 12;

/// Product fields addressable through `filters[...]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Price,
    Rating,
    InStock,
    OutOfStock,
    Category,
    Manufacturer,
}

impl FilterField {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            "inStock" => Some(Self::InStock),
            "outOfStock" => Some(Self::OutOfStock),
            "category" => Some(Self::Category),
            "manufacturer" => Some(Self::Manufacturer),
            _ => None,
        }
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Price | Self::Rating | Self::InStock | Self::OutOfStock
        )
    }
}

/// Comparison operators, spelled `$gte`, `$lte`, `$gt`, `$lt`, `$equals`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Gte,
    Lte,
    Gt,
    Lt,
    Equals,
}

impl FilterOp {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "gte" => Some(Self::Gte),
            "lte" => Some(Self::Lte),
            "gt" => Some(Self::Gt),
            "lt" => Some(Self::Lt),
            "equals" => Some(Self::Equals),
            _ => None,
        }
    }
}

/// A filter value, typed by the field it applies to
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Number(i64),
    Text(String),
}

/// One parsed filter comparison
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub field: FilterField,
    pub op: FilterOp,
    pub value: FilterValue,
}

/// Requested ordering for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Natural order; also what any unrecognized `sort` value means
    #[default]
    DefaultSort,
    TitleAsc,
    TitleDesc,
    LowPrice,
    HighPrice,
}

impl SortKey {
    fn parse(s: &str) -> Self {
        match s {
            "titleAsc" => Self::TitleAsc,
            "titleDesc" => Self::TitleDesc,
            "lowPrice" => Self::LowPrice,
            "highPrice" => Self::HighPrice,
            _ => Self::DefaultSort,
        }
    }
}

/// Typed form of a product listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// `mode=admin` requests the complete unfiltered, unpaginated listing
    pub admin: bool,
    /// At most one clause per field, last occurrence wins
    pub clauses: Vec<FilterClause>,
    pub sort: SortKey,
    /// 1-based page number
    pub page: u64,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            admin: false,
            clauses: Vec::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Tokenize a raw query string and fold it into a typed query.
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs(raw) {
            match key.as_str() {
                "mode" => {
                    if value == "admin" {
                        query.admin = true;
                    }
                }
                "sort" => query.sort = SortKey::parse(&value),
                "page" => {
                    query.page = value.parse::<u64>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                _ => {
                    let Some((field, op)) = parse_filter_key(&key) else {
                        continue;
                    };
                    let Some(value) = typed_value(field, &value) else {
                        continue;
                    };
                    query.clauses.retain(|c| c.field != field);
                    query.clauses.push(FilterClause { field, op, value });
                }
            }
        }

        query
    }

    /// Compile the typed query down to what the repository runs against the
    /// products table.
    ///
    /// Clauses whose operator does not fit the field are dropped here:
    /// `category` and `manufacturer` support `$equals` only, and `outOfStock`
    /// compares the `in_stock` column against the inverted flag. The category
    /// clause cannot be turned into a column comparison without a lookup, so
    /// it is carried as a name for the repository to resolve.
    pub fn compile(&self) -> CompiledListing {
        if self.admin {
            return CompiledListing {
                admin: true,
                condition: Condition::all(),
                category_name: None,
                order: None,
                pagination: None,
            };
        }

        let mut condition = Condition::all();
        let mut category_name = None;

        for clause in &self.clauses {
            match (clause.field, &clause.value) {
                (FilterField::Price, FilterValue::Number(n)) => {
                    condition = condition.add(compare(product::Column::Price, clause.op, *n));
                }
                (FilterField::Rating, FilterValue::Number(n)) => {
                    condition = condition.add(compare(product::Column::Rating, clause.op, *n));
                }
                (FilterField::InStock, FilterValue::Number(n)) => {
                    condition = condition.add(compare(product::Column::InStock, clause.op, *n));
                }
                (FilterField::OutOfStock, FilterValue::Number(n)) => {
                    if clause.op == FilterOp::Equals {
                        condition = condition.add(product::Column::InStock.eq(1 - *n));
                    }
                }
                (FilterField::Category, FilterValue::Text(name)) => {
                    if clause.op == FilterOp::Equals {
                        category_name = Some(name.clone());
                    }
                }
                (FilterField::Manufacturer, FilterValue::Text(name)) => {
                    if clause.op == FilterOp::Equals {
                        condition = condition.add(product::Column::Manufacturer.eq(name.clone()));
                    }
                }
                // value type never mismatches the field; parse guarantees it
                _ => {}
            }
        }

        let order = match self.sort {
            SortKey::DefaultSort => None,
            SortKey::TitleAsc => Some((product::Column::Title, Order::Asc)),
            SortKey::TitleDesc => Some((product::Column::Title, Order::Desc)),
            SortKey::LowPrice => Some((product::Column::Price, Order::Asc)),
            SortKey::HighPrice => Some((product::Column::Price, Order::Desc)),
        };

        CompiledListing {
            admin: false,
            condition,
            category_name,
            order,
            pagination: Some(((self.page - 1) * PAGE_SIZE, PAGE_SIZE)),
        }
    }
}

/// A listing compiled to the pieces the repository applies
#[derive(Debug, Clone)]
pub struct CompiledListing {
    pub admin: bool,
    pub condition: Condition,
    /// Exact category name, resolved against the categories table before the
    /// main query; no match means an empty listing
    pub category_name: Option<String>,
    pub order: Option<(product::Column, Order)>,
    /// (offset, limit)
    pub pagination: Option<(u64, u64)>,
}

/// Split a raw query string into percent-decoded key/value pairs, keeping
/// query-string order. Pairs that fail to decode are skipped.
fn pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.split('&').filter(|s| !s.is_empty()).filter_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = urlencoding::decode(key).ok()?;
        let value = urlencoding::decode(value).ok()?;
        Some((key.into_owned(), value.into_owned()))
    })
}

/// Parse `filters[<field>][$<op>]` into its typed parts. Anything that
/// deviates from that exact shape is rejected.
fn parse_filter_key(key: &str) -> Option<(FilterField, FilterOp)> {
    let rest = key.strip_prefix("filters[")?;
    let (field, rest) = rest.split_once(']')?;
    let op = rest.strip_prefix("[$")?.strip_suffix(']')?;
    Some((FilterField::parse(field)?, FilterOp::parse(op)?))
}

fn typed_value(field: FilterField, raw: &str) -> Option<FilterValue> {
    if field.is_numeric() {
        raw.parse::<i64>().ok().map(FilterValue::Number)
    } else {
        Some(FilterValue::Text(raw.to_string()))
    }
}

fn compare(column: product::Column, op: FilterOp, value: i64) -> SimpleExpr {
    match op {
        FilterOp::Gte => column.gte(value),
        FilterOp::Lte => column.lte(value),
        FilterOp::Gt => column.gt(value),
        FilterOp::Lt => column.lt(value),
        FilterOp::Equals => column.eq(value),
    }
}
