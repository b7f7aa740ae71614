//! SQL queries shared by the pool-backed store and its transactions.
//!
//! Every helper is generic over the executor, so the same statements serve
//! both auto-committing operations (`&PgPool`) and batched ones
//! (`&mut PgConnection` inside a transaction).

use geodex_core::{Country, Currency};
use geodex_storage::StorageError;
use sqlx_core::error::Error as SqlxError;
use sqlx_core::executor::Executor;
use sqlx_core::query::query;
use sqlx_core::query_as::query_as;
use sqlx_postgres::Postgres;

use crate::error::is_unique_violation;

const COLUMNS: &str = "code, name, region, sub_region, demonym, population, independent, flag, currency_name, currency_symbol";

/// One row of the `countries` table, surrogate id excluded.
type CountryRow = (
    String,         // code
    String,         // name
    Option<String>, // region
    Option<String>, // sub_region
    Option<String>, // demonym
    Option<i64>,    // population
    Option<bool>,   // independent
    Option<String>, // flag
    Option<String>, // currency_name
    Option<String>, // currency_symbol
);

fn row_to_country(row: CountryRow) -> Country {
    Country {
        code: row.0,
        name: row.1,
        region: row.2,
        sub_region: row.3,
        demonym: row.4,
        population: row.5,
        independent: row.6,
        flag: row.7,
        currency: Currency::new(row.8, row.9),
    }
}

fn map_sqlx(err: SqlxError) -> StorageError {
    match err {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
            StorageError::connection(err.to_string())
        }
        other => StorageError::internal(other.to_string()),
    }
}

pub(crate) async fn list<'e, E>(executor: E) -> Result<Vec<Country>, StorageError>
where
    E: Executor<'e, Database = Postgres>,
{
    let sql = format!("SELECT {COLUMNS} FROM countries ORDER BY code");
    let rows: Vec<CountryRow> = query_as(&sql)
        .fetch_all(executor)
        .await
        .map_err(map_sqlx)?;
    Ok(rows.into_iter().map(row_to_country).collect())
}

pub(crate) async fn find_by_code<'e, E>(
    executor: E,
    code: &str,
) -> Result<Option<Country>, StorageError>
where
    E: Executor<'e, Database = Postgres>,
{
    let sql = format!("SELECT {COLUMNS} FROM countries WHERE code = $1");
    let row: Option<CountryRow> = query_as(&sql)
        .bind(code)
        .fetch_optional(executor)
        .await
        .map_err(map_sqlx)?;
    Ok(row.map(row_to_country))
}

pub(crate) async fn insert<'e, E>(executor: E, country: &Country) -> Result<(), StorageError>
where
    E: Executor<'e, Database = Postgres>,
{
    let sql = format!(
        "INSERT INTO countries ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
    );
    query(&sql)
        .bind(&country.code)
        .bind(&country.name)
        .bind(&country.region)
        .bind(&country.sub_region)
        .bind(&country.demonym)
        .bind(country.population)
        .bind(country.independent)
        .bind(&country.flag)
        .bind(&country.currency.name)
        .bind(&country.currency.symbol)
        .execute(executor)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::already_exists(&country.code)
            } else {
                map_sqlx(e)
            }
        })?;
    Ok(())
}

pub(crate) async fn update<'e, E>(executor: E, country: &Country) -> Result<(), StorageError>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = query(
        "UPDATE countries
         SET name = $2, region = $3, sub_region = $4, demonym = $5, population = $6,
             independent = $7, flag = $8, currency_name = $9, currency_symbol = $10
         WHERE code = $1",
    )
    .bind(&country.code)
    .bind(&country.name)
    .bind(&country.region)
    .bind(&country.sub_region)
    .bind(&country.demonym)
    .bind(country.population)
    .bind(country.independent)
    .bind(&country.flag)
    .bind(&country.currency.name)
    .bind(&country.currency.symbol)
    .execute(executor)
    .await
    .map_err(map_sqlx)?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found(&country.code));
    }
    Ok(())
}

pub(crate) async fn delete<'e, E>(executor: E, code: &str) -> Result<bool, StorageError>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = query("DELETE FROM countries WHERE code = $1")
        .bind(code)
        .execute(executor)
        .await
        .map_err(map_sqlx)?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_country_with_embedded_currency() {
        let row: CountryRow = (
            "FRA".into(),
            "France".into(),
            Some("Europe".into()),
            Some("Western Europe".into()),
            Some("French".into()),
            Some(67_391_582),
            Some(true),
            Some("https://flags.example/fr.png".into()),
            Some("Euro".into()),
            Some("€".into()),
        );
        let country = row_to_country(row);
        assert_eq!(country.code, "FRA");
        assert_eq!(country.currency.name.as_deref(), Some("Euro"));
    }

    #[test]
    fn null_currency_columns_map_to_empty_currency() {
        let row: CountryRow = (
            "TST".into(),
            "Test".into(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        );
        let country = row_to_country(row);
        assert_eq!(country.currency, geodex_core::Currency::default());
        assert!(country.independent.is_none());
    }

    #[test]
    fn connection_class_errors_map_to_connection() {
        assert!(matches!(
            map_sqlx(SqlxError::PoolClosed),
            StorageError::Connection { .. }
        ));
        assert!(matches!(
            map_sqlx(SqlxError::RowNotFound),
            StorageError::Internal { .. }
        ));
    }
}
