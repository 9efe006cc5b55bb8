//! Text rendering of the registry views.

use prettytable::{row, Table};
use psm_reducer::NO_DATA;
use psm_registry::{Company, ProductProfile, ProductRecord, ProductTypeOverview, SubstanceRow};
use std::io::Write;

fn or_no_data(value: Option<&str>) -> &str {
    value.unwrap_or(NO_DATA)
}

fn join_or_no_data<'a>(values: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    let joined = values.into_iter().collect::<Vec<_>>().join(separator);
    if joined.is_empty() {
        NO_DATA.to_owned()
    } else {
        joined
    }
}

fn section<W: Write + ?Sized>(writer: &mut W, title: &str) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{title}")?;
    Ok(())
}

/// Writes all sections of a product profile. Empty sections are left out.
pub fn product_profile<W: Write + ?Sized>(
    writer: &mut W,
    profile: &ProductProfile,
) -> anyhow::Result<()> {
    let product = &profile.product;
    writeln!(
        writer,
        "{} ({})",
        or_no_data(product.name.as_deref()),
        product.id()
    )?;
    product_table(profile, product).print(writer)?;

    if let Some(company) = &profile.company {
        section(writer, "Permission holder")?;
        company_table(company).print(writer)?;
    }

    if !profile.hazards.is_empty() {
        section(writer, "Hazards")?;
        let mut table = Table::new();
        table.set_titles(row!["Class", "Code", "Statement"]);
        for (class, entries) in profile.hazards.iter() {
            // The class is shown once for all of its statements.
            for (index, entry) in entries.iter().enumerate() {
                let class = if index == 0 { class } else { "" };
                table.add_row(row![class, or_no_data(entry.code.as_deref()), entry.label]);
            }
        }
        table.print(writer)?;
    }

    if !profile.components.is_empty() {
        section(writer, "Components")?;
        let mut table = Table::new();
        table.set_titles(row!["Substance", "Role", "Portion", "ChEBI"]);
        for component in &profile.components {
            table.add_row(row![
                or_no_data(component.name.as_deref()),
                or_no_data(component.role.as_deref()),
                component.portion_label().as_deref().unwrap_or(NO_DATA),
                component.chebi_id().as_deref().unwrap_or(NO_DATA)
            ]);
        }
        table.print(writer)?;
    }

    let indications = &profile.indications;
    if !indications.indications.is_empty() {
        section(writer, "Indications")?;
        let mut table = Table::new();
        table.set_titles(row!["Area", "Crops", "Pests", "Dosage", "Obligations"]);
        for indication in &indications.indications {
            let obligations = indication
                .obligations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            table.add_row(row![
                or_no_data(indication.area.as_deref()),
                join_or_no_data(indication.crops.iter().map(|crop| crop.label.as_str()), "\n"),
                join_or_no_data(indication.pests.iter().map(|pest| pest.label.as_str()), "\n"),
                indication.dosage_label(),
                join_or_no_data(obligations.iter().map(String::as_str), ", ")
            ]);
        }
        table.print(writer)?;
    }

    if !indications.obligations.is_empty() {
        section(writer, "Obligations")?;
        let mut table = Table::new();
        for obligation in &indications.obligations {
            table.add_row(row![obligation.number, obligation.text]);
        }
        table.print(writer)?;
    }
    Ok(())
}

fn product_table(profile: &ProductProfile, product: &ProductRecord) -> Table {
    let country = product.country.as_ref().map(|country| match &country.code {
        Some(code) => format!("{} ({code})", country.name),
        None => country.name.clone(),
    });
    let same_products = profile
        .same_products
        .iter()
        .map(|same| format!("{} [{}]", same.label, same.id()))
        .collect::<Vec<_>>();

    let mut table = Table::new();
    table.add_row(row![
        "Federal admission number",
        or_no_data(product.federal_no.as_deref())
    ]);
    table.add_row(row![
        "Foreign admission number",
        or_no_data(product.foreign_no.as_deref())
    ]);
    table.add_row(row![
        "Formulation",
        or_no_data(product.formulation.as_deref())
    ]);
    table.add_row(row!["Country of origin", or_no_data(country.as_deref())]);
    table.add_row(row![
        "Product types",
        join_or_no_data(profile.types.iter().map(|t| t.label.as_str()), ", ")
    ]);
    table.add_row(row![
        "Same products",
        join_or_no_data(same_products.iter().map(String::as_str), "\n")
    ]);
    table
}

fn company_table(company: &Company) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Name", or_no_data(company.name.as_deref())]);
    table.add_row(row![
        "Address",
        company.address().as_deref().unwrap_or(NO_DATA)
    ]);
    table.add_row(row!["Telephone", or_no_data(company.telephone.as_deref())]);
    table.add_row(row!["Email", or_no_data(company.email.as_deref())]);
    table.add_row(row!["Fax", or_no_data(company.fax.as_deref())]);
    for (kind, value) in &company.identifiers {
        table.add_row(row![kind, value]);
    }
    table
}

pub fn product_type<W: Write + ?Sized>(
    writer: &mut W,
    overview: &ProductTypeOverview,
) -> anyhow::Result<()> {
    writeln!(writer, "{}", or_no_data(overview.name.as_deref()))?;
    if let Some(description) = &overview.description {
        writeln!(writer, "{description}")?;
    }
    let mut table = Table::new();
    table.set_titles(row!["Product", "Federal admission number", "Permission holder"]);
    for product in &overview.products {
        table.add_row(row![
            product.name,
            or_no_data(product.federal_no.as_deref()),
            or_no_data(product.company_name.as_deref())
        ]);
    }
    table.print(writer)?;
    Ok(())
}

pub fn substances<W: Write + ?Sized>(
    writer: &mut W,
    substances: &[SubstanceRow],
) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_titles(row!["Substance", "IUPAC name", "Roles", "Products", "Average %"]);
    for substance in substances {
        table.add_row(row![
            substance.name,
            or_no_data(substance.iupac.as_deref()),
            or_no_data(substance.roles.as_deref()),
            substance
                .products
                .map_or_else(|| NO_DATA.to_owned(), |count| count.to_string()),
            or_no_data(substance.average_percentage.as_deref())
        ]);
    }
    table.print(writer)?;
    Ok(())
}
