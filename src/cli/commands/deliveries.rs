//! Supplier delivery timeliness report.

use super::run_report;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Per-invoice expected vs actual delivery, with a day difference and a
/// derived status. A NULL actual date means the delivery is still pending.
const DELIVERY_DETAIL: &str = "
    SELECT
        sd.InvoiceID,
        s.Name,
        sd.ExpectedDelivery,
        sd.ActualDelivery,
        CAST(julianday(sd.ActualDelivery) - julianday(sd.ExpectedDelivery) AS INTEGER)
            AS DaysDifference,
        CASE
            WHEN sd.ActualDelivery IS NULL THEN 'Pending'
            WHEN sd.ActualDelivery < sd.ExpectedDelivery THEN 'Early'
            WHEN sd.ActualDelivery = sd.ExpectedDelivery THEN 'On Time'
            WHEN sd.ActualDelivery > sd.ExpectedDelivery THEN 'Late'
        END AS DeliveryStatus
    FROM SupplierDelivery AS sd
    INNER JOIN Supplier AS s
        ON sd.SupplierID = s.SupplierID
    ORDER BY s.Name, sd.ExpectedDelivery, sd.InvoiceID;
";

/// Per-supplier summary over completed deliveries only.
const DELIVERY_SUMMARY: &str = "
    SELECT
        s.SupplierID,
        s.Name,
        COUNT(*) AS TotalDeliveries,
        SUM(CASE WHEN sd.ActualDelivery IS NULL THEN 1 ELSE 0 END) AS PendingDeliveries,
        ROUND(AVG(julianday(sd.ActualDelivery) - julianday(sd.ExpectedDelivery)), 2)
            AS AvgDaysDifference
    FROM SupplierDelivery AS sd
    JOIN Supplier AS s
        ON sd.SupplierID = s.SupplierID
    WHERE sd.ActualDelivery IS NOT NULL
    GROUP BY s.SupplierID, s.Name
    ORDER BY AvgDaysDifference DESC, s.Name;
";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    run_report(
        &pool,
        "Supplier Delivery Report - Expected vs Actual",
        DELIVERY_DETAIL,
    )?;
    run_report(
        &pool,
        "Supplier Delivery Summary - Average Days Difference",
        DELIVERY_SUMMARY,
    )?;

    Ok(())
}
