//! Symbolic type names
//!
//! String constants for every built-in type name so callers never have to
//! type raw literals. The names in the last group have no registered code;
//! schema tooling uses them for platform-native column types.

pub const ARRAY: &str = "ARRAY";
pub const BIGINT: &str = "BIGINT";
pub const BINARY: &str = "BINARY";
pub const BIT: &str = "BIT";
pub const BLOB: &str = "BLOB";
pub const BOOLEAN: &str = "BOOLEAN";
pub const CHAR: &str = "CHAR";
pub const CLOB: &str = "CLOB";
pub const DATALINK: &str = "DATALINK";
pub const DATE: &str = "DATE";
pub const DECIMAL: &str = "DECIMAL";
pub const DISTINCT: &str = "DISTINCT";
pub const DOUBLE: &str = "DOUBLE";
pub const FLOAT: &str = "FLOAT";
pub const INTEGER: &str = "INTEGER";
pub const JAVA_OBJECT: &str = "JAVA_OBJECT";
pub const LONGVARBINARY: &str = "LONGVARBINARY";
pub const LONGVARCHAR: &str = "LONGVARCHAR";
pub const NULL: &str = "NULL";
pub const NUMERIC: &str = "NUMERIC";
pub const OTHER: &str = "OTHER";
pub const REAL: &str = "REAL";
pub const REF: &str = "REF";
pub const SMALLINT: &str = "SMALLINT";
pub const STRUCT: &str = "STRUCT";
pub const TIME: &str = "TIME";
pub const TIMESTAMP: &str = "TIMESTAMP";
pub const TIMESTAMPTZ: &str = "TIMESTAMPTZ";
pub const TIMESTAMPLTZ: &str = "TIMESTAMPLTZ";
pub const TINYINT: &str = "TINYINT";
pub const VARBINARY: &str = "VARBINARY";
pub const VARCHAR: &str = "VARCHAR";

pub const SQLXML: &str = "SQLXML";
pub const NCHAR: &str = "NCHAR";
pub const NVARCHAR: &str = "NVARCHAR";
pub const LONGNVARCHAR: &str = "LONGNVARCHAR";
pub const NCLOB: &str = "NCLOB";

/// Torque/Turbine boolean stored as TINYINT (name lookup only)
pub const BOOLEANINT: &str = "BOOLEANINT";
/// Torque/Turbine boolean stored as CHAR (name lookup only)
pub const BOOLEANCHAR: &str = "BOOLEANCHAR";

pub const GEOMETRY: &str = "GEOMETRY";
pub const GEOGRAPHY: &str = "GEOGRAPHY";
pub const POINT: &str = "POINT";
pub const LINESTRING: &str = "LINESTRING";
pub const POLYGON: &str = "POLYGON";
pub const UUID: &str = "UUID";
pub const VARBIT: &str = "VARBIT";
pub const INTERVAL: &str = "INTERVAL";
pub const IMAGE: &str = "IMAGE";
pub const DATETIME2: &str = "DATETIME2";
pub const TSVECTOR: &str = "TSVECTOR";
