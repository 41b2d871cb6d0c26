//! Output formatting module

use dispatch_app::app::TripQuote;
use dispatch_domain::model::{Driver, Route, TripParameters, Truck};
use dispatch_domain::service::{generate_assignment_report, AssignmentCheckResult, CostBreakdown, Page, Violation};
use dispatch_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ValidationOutput<'a> {
    is_valid: bool,
    violations: &'a [Violation],
    messages: Vec<String>,
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    params: &'a TripParameters,
    breakdown: &'a CostBreakdown,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_violations(output_format: OutputFormat, violations: &[Violation]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&ValidationOutput {
            is_valid: violations.is_empty(),
            violations,
            messages: violations.iter().map(ToString::to_string).collect(),
        });
    }

    println!("\nAssignment Validation");
    println!("=====================");
    if violations.is_empty() {
        println!("Result:          VALID");
    } else {
        println!("Result:          INVALID ({} violations)", violations.len());
        println!();
        for v in violations {
            println!("  - {}", v);
        }
    }
    Ok(())
}

fn print_breakdown(b: &CostBreakdown) {
    println!("\n--- Driver Pay ---");
    println!("Drive time:      {:.2} h", b.drive_time_hours);
    println!("Base pay:        ${:.2}", b.base_pay);
    println!("Experience:      ${:.2}", b.experience_bonus);
    println!("Route bonus:     ${:.2}", b.route_bonus);
    println!("Driver pay:      ${:.2}", b.total_driver_pay);
    println!("\n--- Trip Cost ---");
    println!("Fuel:            ${:.2}", b.fuel_cost);
    println!("Other:           ${:.2}", b.other_costs);
    println!("Total cost:      ${:.2}", b.total_cost);
    println!("Min revenue:     ${:.2}", b.minimum_revenue);
    println!("Profit:          ${:.2}", b.profit);
}

pub fn output_breakdown(output_format: OutputFormat, params: &TripParameters, breakdown: &CostBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&QuoteOutput { params, breakdown });
    }

    println!("\nTrip Quote");
    println!("==========");
    println!("Distance:        {:.1} mi", params.distance_miles);
    println!("Route type:      {}", params.route_type);
    println!("Hourly rate:     ${:.2}", params.hourly_rate);
    println!("Experience:      {} years", params.years_experience);
    print_breakdown(breakdown);
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, quote: &TripQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(quote);
    }

    println!("\nTrip Quote");
    println!("==========");
    println!("Route:           {} ({})", quote.route_name, quote.route_id);
    println!("Driver:          {} ({})", quote.driver_name, quote.driver_id);
    println!("Distance:        {:.1} mi", quote.params.distance_miles);
    println!("Route type:      {}", quote.params.route_type);
    println!("Hourly rate:     ${:.2}", quote.params.hourly_rate);
    println!("Experience:      {} years", quote.params.years_experience);
    print_breakdown(&quote.breakdown);
    Ok(())
}

pub fn output_check(output_format: OutputFormat, results: &[AssignmentCheckResult]) -> Result<()> {
    match output_format {
        OutputFormat::Json => print_json(results),
        OutputFormat::Table => {
            println!("{}", generate_assignment_report(results));
            Ok(())
        }
    }
}

fn print_page_footer<T>(page: &Page<T>) {
    println!(
        "\nPage {}/{} ({} total){}",
        page.page,
        page.total_pages.max(1),
        page.total,
        if page.has_next() { ", more with --page" } else { "" }
    );
}

pub fn output_drivers(output_format: OutputFormat, page: &Page<Driver>) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(page);
    }

    println!("{:<10} {:<24} {:<9} {:>5}  {}", "ID", "NAME", "LICENSE", "YEARS", "STATUS");
    for d in &page.items {
        println!(
            "{:<10} {:<24} {:<9} {:>5}  {}",
            d.id,
            d.name,
            d.license.label(),
            d.years_experience,
            if d.available { "available" } else { "unavailable" }
        );
    }
    print_page_footer(page);
    Ok(())
}

pub fn output_trucks(output_format: OutputFormat, page: &Page<Truck>) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(page);
    }

    println!("{:<10} {:<8} {:<9} {}", "ID", "CLASS", "NEEDS", "STATUS");
    for t in &page.items {
        let status = if t.in_maintenance {
            "maintenance"
        } else if t.available {
            "available"
        } else {
            "unavailable"
        };
        println!(
            "{:<10} {:<8} {:<9} {}",
            t.id,
            t.class.label(),
            t.required_license().label(),
            status
        );
    }
    print_page_footer(page);
    Ok(())
}

pub fn output_routes(output_format: OutputFormat, page: &Page<Route>) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(page);
    }

    println!("{:<10} {:<24} {:<10} {:>9}", "ID", "NAME", "TYPE", "MILES");
    for r in &page.items {
        println!(
            "{:<10} {:<24} {:<10} {:>9.1}",
            r.id,
            r.display_name(),
            r.route_type.label(),
            r.distance_miles
        );
    }
    print_page_footer(page);
    Ok(())
}
