//! Integration tests for InsightLens.

use insightlens::charts::{
    CATEGORY_BREAKDOWN, DATA_TYPES, REVENUE_DISTRIBUTION, REVENUE_TREND, TOP_CUSTOMERS,
};
use insightlens::{
    AnalysisConfig, AnalysisResult, BusinessRole, ChartKind, ChartSeries, ClassifierConfig,
    DisplayFormat, InsightError, InsightLens, MetricValue, SemanticType, Trend,
};

fn analyze(raw: &str) -> AnalysisResult {
    InsightLens::new().analyze(raw).expect("Analysis failed")
}

fn chart<'a>(result: &'a AnalysisResult, title: &str) -> Option<&'a ChartSeries> {
    result.charts.iter().find(|c| c.title == title)
}

fn metric_value(result: &AnalysisResult, label: &str) -> Option<MetricValue> {
    result
        .metrics
        .iter()
        .find(|m| m.label == label)
        .map(|m| m.value.clone())
}

/// A small e-commerce export similar to what users upload.
fn orders_csv() -> String {
    let mut csv = String::from("product_category,order_id,customer_id,amount,order_date,region\n");
    let rows = [
        ("Electronics", "O1", "C1", "999.99", "2024-01-15", "North"),
        ("Accessories", "O2", "C2", "29.99", "2024-01-15", "South"),
        ("Accessories", "O3", "C1", "79.99", "2024-01-16", "East"),
        ("Electronics", "O4", "C3", "299.99", "2024-01-17", "West"),
        ("Electronics", "O5", "C4", "499.99", "2024-01-17", "North"),
        ("Books", "O6", "C2", "15.00", "2024-01-18", "South"),
        ("Books", "O7", "C5", "", "2024-01-19", "North"),
        ("Accessories", "O8", "C3", "45.50", "2024-01-19", "East"),
    ];
    for (category, order, customer, amount, date, region) in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            category, order, customer, amount, date, region
        ));
    }
    csv
}

// =============================================================================
// Reference Examples
// =============================================================================

#[test]
fn test_amount_date_example() {
    let result = analyze("amount,date\n10,2024-01-01\n20,2024-01-01\n30,2024-01-02");

    let amount = result.overview.get_column("amount").unwrap();
    assert_eq!(amount.semantic_type, SemanticType::Numeric);
    assert_eq!(amount.business_role, BusinessRole::Revenue);

    assert_eq!(metric_value(&result, "Total Revenue"), Some(MetricValue::Number(60.0)));

    let trend = chart(&result, REVENUE_TREND).expect("trend chart");
    assert_eq!(trend.kind, ChartKind::Line);
    let points: Vec<(&str, f64)> = trend.points().collect();
    assert_eq!(points, vec![("2024-01-01", 30.0), ("2024-01-02", 30.0)]);
}

#[test]
fn test_header_only_is_malformed() {
    let err = InsightLens::new().analyze("header-only").unwrap_err();
    assert!(matches!(err, InsightError::MalformedInput { .. }));
    assert!(err.to_string().starts_with("Malformed input"));
}

#[test]
fn test_unique_customers_insight() {
    let result = analyze("customer_id\nalice\nbob\ncarol\ndave\nerin\n");

    let column = result.overview.get_column("customer_id").unwrap();
    assert_eq!(column.business_role, BusinessRole::Customer);
    assert!(
        result
            .insights
            .contains(&"Dataset includes 5 unique customers".to_string())
    );
}

#[test]
fn test_quoted_field_with_comma() {
    let result = analyze("city,population\n\"New York, NY\",8336817\n\"Austin, TX\",974447\n");

    assert_eq!(result.overview.column_count, 2);
    let population = result.overview.get_column("population").unwrap();
    assert_eq!(population.semantic_type, SemanticType::Numeric);
    assert_eq!(population.null_count, 0);
}

// =============================================================================
// Realistic Dataset
// =============================================================================

#[test]
fn test_orders_dataset() {
    let result = analyze(&orders_csv());
    let overview = &result.overview;

    assert_eq!(overview.row_count, 8);
    assert_eq!(overview.column_count, 6);
    assert_eq!(overview.total_missing_values, 1);
    assert_eq!(overview.duplicate_row_count, 0);

    let roles: Vec<BusinessRole> = overview.columns.iter().map(|c| c.business_role).collect();
    assert_eq!(
        roles,
        vec![
            BusinessRole::Category, // product_category
            BusinessRole::Customer, // order_id
            BusinessRole::Customer, // customer_id
            BusinessRole::Revenue,  // amount
            BusinessRole::Date,     // order_date
            BusinessRole::None,     // region: 4 distinct in 8 rows
        ]
    );
    assert_eq!(
        overview.get_column("order_date").unwrap().semantic_type,
        SemanticType::Datetime
    );

    // 1 empty cell in 48
    let completeness = result
        .metrics
        .iter()
        .find(|m| m.label == "Data Completeness")
        .unwrap();
    assert_eq!(completeness.value, MetricValue::Number(98.0));
    assert_eq!(completeness.display_format, Some(DisplayFormat::Percentage));
    assert_eq!(completeness.trend, Some(Trend::Down));

    let histogram = chart(&result, REVENUE_DISTRIBUTION).unwrap();
    assert_eq!(histogram.len(), 10);
    assert_eq!(histogram.values.iter().sum::<f64>(), 7.0);

    let breakdown = chart(&result, CATEGORY_BREAKDOWN).unwrap();
    assert_eq!(breakdown.categories, vec!["Electronics", "Accessories", "Books"]);
    assert_eq!(breakdown.values, vec![3.0, 3.0, 2.0]);

    let trend = chart(&result, REVENUE_TREND).unwrap();
    assert_eq!(trend.categories.first().map(String::as_str), Some("2024-01-15"));
    assert_eq!(trend.categories.last().map(String::as_str), Some("2024-01-19"));

    // order_id is the first customer-role column
    let customers = chart(&result, TOP_CUSTOMERS).unwrap();
    assert_eq!(customers.categories[0], "O1");

    let types = chart(&result, DATA_TYPES).unwrap();
    assert_eq!(types.kind, ChartKind::Doughnut);
    assert_eq!(types.categories, vec!["numeric", "categorical", "datetime"]);
    assert_eq!(types.values, vec![1.0, 4.0, 1.0]);

    let stats = result.revenue_statistics.as_ref().unwrap();
    assert_eq!(stats.column, "amount");
    assert_eq!(stats.count, 7);
    assert_eq!(stats.min, 15.0);
    assert_eq!(stats.median, 79.99);
    assert_eq!(stats.max, 999.99);

    assert!(result.insights.iter().any(|i| i == "Dataset includes 8 unique customers"));
    assert!(result.insights.iter().any(|i| i.starts_with("Top product_category: Electronics")));
    assert_eq!(result.recommendations.len(), 4);
}

#[test]
fn test_no_business_columns_degrades() {
    let result = analyze("alpha,beta\n1.5,2\n2.5,3\n3.5,4\n");

    assert_eq!(result.metrics.len(), 2);
    assert!(result.revenue_statistics.is_none());
    let titles: Vec<&str> = result.charts.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec![DATA_TYPES]);
    assert_eq!(result.insights.len(), 1);
    assert!(result.recommendations.is_empty());
}

#[test]
fn test_short_rows_padded() {
    let result = analyze("a,b,c\n1,2,3\n4\n5,6\n");

    assert_eq!(result.overview.row_count, 3);
    assert_eq!(result.overview.total_missing_values, 3);
}

#[test]
fn test_duplicate_header_names_are_positional() {
    let result = analyze("value,value\n1,x\n2,y\n");

    assert_eq!(result.overview.column_count, 2);
    assert_eq!(result.overview.columns[0].semantic_type, SemanticType::Numeric);
    assert_eq!(result.overview.columns[1].semantic_type, SemanticType::Categorical);
    // Revenue figures come from the first column with the name
    assert_eq!(metric_value(&result, "Total Revenue"), Some(MetricValue::Number(3.0)));
}

#[test]
fn test_text_column_with_revenue_name_is_not_revenue() {
    let result = analyze("sales_channel,amount\nweb,10\nstore,20\nweb,30\n");

    assert_eq!(
        result.overview.get_column("sales_channel").unwrap().business_role,
        BusinessRole::Revenue
    );
    assert_eq!(metric_value(&result, "Total Revenue"), Some(MetricValue::Number(60.0)));
    assert_eq!(metric_value(&result, "Average Order Value"), Some(MetricValue::Number(20.0)));
    assert_eq!(chart(&result, REVENUE_DISTRIBUTION).unwrap().values.iter().sum::<f64>(), 3.0);
    assert!(
        result
            .insights
            .contains(&"Total revenue of $60.00 from 3 transactions".to_string())
    );
}

#[test]
fn test_revenue_name_without_numbers_has_no_revenue() {
    let result = analyze("sales_rep,qty\nAnn,1\nBo,2\n");

    assert_eq!(metric_value(&result, "Total Revenue"), None);
    assert!(result.revenue_statistics.is_none());
    assert!(chart(&result, REVENUE_DISTRIBUTION).is_none());
    assert!(!result.recommendations.iter().any(|r| r.contains("high-value")));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_configurable_numeric_threshold() {
    let raw = "score\n1\n2\nx\ny\n";

    let default = analyze(raw);
    assert_eq!(default.overview.columns[0].semantic_type, SemanticType::Categorical);

    let relaxed = InsightLens::with_config(AnalysisConfig {
        classifier: ClassifierConfig {
            numeric_threshold: 0.5,
            ..ClassifierConfig::default()
        },
        ..AnalysisConfig::default()
    })
    .analyze(raw)
    .unwrap();
    assert_eq!(relaxed.overview.columns[0].semantic_type, SemanticType::Numeric);
}

#[test]
fn test_result_serializes_to_camel_case() {
    let result = analyze("amount,region\n26,N\n18,S\n18,N\n18,N\n");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["overview"]["rowCount"], 4);
    assert_eq!(json["revenueStatistics"]["std"], 4.0);
    assert_eq!(json["revenueStatistics"]["q3"], 20.0);
    assert_eq!(json["overview"]["columns"][0]["businessRole"], "revenue");
    assert_eq!(json["overview"]["columns"][0]["semanticType"], "numeric");
    assert_eq!(json["charts"][0]["kind"], "bar");

    let back: AnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
