//! Infrastructure storage layer - association table persistence.
//!
//! - `db` - Connection pool construction
//! - `entity` - SeaORM entity for the association table
//! - `mapper` - Conversions between SeaORM models and SDK contract types
//! - `migrations` - Table bootstrap
//! - `sea_orm_repo` - `AssociationRepository` over a SeaORM connection

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use sea_orm_repo::SeaOrmAssociationRepository;
