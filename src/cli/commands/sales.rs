//! Wine distribution and sales reports.

use super::run_report;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Wine distribution, ordered by distributor.
const WINE_BY_DISTRIBUTOR: &str = "
    SELECT
        w.WineID,
        w.WineName,
        w.YearProduced,
        d.DistID,
        d.DistName
    FROM Distributor d
    JOIN DistOrder o
        ON d.DistID = o.DistID
    JOIN DistItemOrderID doi
        ON o.OrderID = doi.OrderID
    JOIN Wine w
        ON doi.WineID = w.WineID
    ORDER BY d.DistID, d.DistName
    LIMIT 0, 30;
";

/// Total sold per wine, best sellers first.
const WINE_SOLD: &str = "
    SELECT
        w.WineID,
        w.WineName,
        w.YearProduced,
        SUM(dio.Quantity) AS TotalSold
    FROM Wine w
    JOIN DistItemOrderID dio
        ON w.WineID = dio.WineID
    GROUP BY
        w.WineID,
        w.WineName,
        w.YearProduced
    ORDER BY TotalSold DESC;
";

/// Wines with no orders at all.
const WINE_NOT_SOLD: &str = "
    SELECT
        w.WineID,
        w.WineName,
        w.YearProduced,
        COALESCE(SUM(dio.Quantity), 0) AS NotSold
    FROM Wine w
    LEFT JOIN DistItemOrderID dio
        ON w.WineID = dio.WineID
    GROUP BY w.WineID, w.WineName, w.YearProduced
    HAVING NotSold = 0
    ORDER BY w.WineID;
";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    run_report(
        &pool,
        "Wine Distribution (by Distributor)",
        WINE_BY_DISTRIBUTOR,
    )?;
    run_report(&pool, "Total Sold per Wine", WINE_SOLD)?;
    run_report(&pool, "Wines That Haven't Sold", WINE_NOT_SOLD)?;

    Ok(())
}
