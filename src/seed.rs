//! Built-in sample collection used when the persisted blob is absent. Totals
//! are derived through the calculation module so the seed upholds the same
//! amount invariants as user-created invoices.

use chrono::NaiveDate;

use crate::calc;
use crate::models::{Invoice, InvoiceStatus, LineItem};

const SAMPLE_TAX_RATE: f64 = 10.0;

pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        sample(
            "1",
            "INV-2024-001",
            "Sarah Chen",
            "sarah.chen@techstart.io",
            date(2024, 3, 15),
            date(2024, 4, 15),
            &[
                ("Website redesign and UX audit for mobile responsiveness", 1.0, 3500.0),
                ("Brand identity guidelines documentation", 1.0, 1200.0),
            ],
            InvoiceStatus::Paid,
        ),
        sample(
            "2",
            "INV-2024-002",
            "Marcus Rodriguez",
            "marcus@global-solutions.com",
            date(2024, 3, 18),
            date(2024, 4, 18),
            &[
                ("Quarterly SEO optimization and content strategy", 3.0, 850.0),
                ("Analytics dashboard setup with custom reporting", 1.0, 600.0),
            ],
            InvoiceStatus::Sent,
        ),
        sample(
            "3",
            "INV-2024-003",
            "Emily Watson",
            "emily@creativestudio.co",
            date(2024, 3, 20),
            date(2024, 4, 20),
            &[
                ("Photography session for product catalog", 4.0, 450.0),
                ("Image retouching and color correction", 20.0, 25.0),
            ],
            InvoiceStatus::Draft,
        ),
        sample(
            "4",
            "INV-2024-004",
            "David Park",
            "david.park@innovatelabs.com",
            date(2024, 2, 28),
            date(2024, 3, 30),
            &[
                ("Mobile app UI design for iOS and Android platforms", 1.0, 5200.0),
                ("Interactive prototype development", 1.0, 1800.0),
            ],
            InvoiceStatus::Overdue,
        ),
        sample(
            "5",
            "INV-2024-005",
            "Lisa Thompson",
            "lisa@thompson-consulting.net",
            date(2024, 3, 22),
            date(2024, 4, 22),
            &[
                ("Business strategy consultation sessions", 8.0, 200.0),
                ("Market analysis report compilation", 1.0, 950.0),
            ],
            InvoiceStatus::Paid,
        ),
        sample(
            "6",
            "INV-2024-006",
            "James Wilson",
            "j.wilson@constructpro.com",
            date(2024, 3, 25),
            date(2024, 4, 25),
            &[
                ("Architectural visualization renders", 5.0, 600.0),
                ("3D modeling for interior spaces", 3.0, 450.0),
            ],
            InvoiceStatus::Sent,
        ),
        sample(
            "7",
            "INV-2024-007",
            "Anna Kowalski",
            "anna@designhaus.eu",
            date(2024, 3, 28),
            date(2024, 4, 28),
            &[
                ("E-commerce platform migration and setup", 1.0, 4200.0),
                ("Payment gateway integration testing", 1.0, 800.0),
            ],
            InvoiceStatus::Draft,
        ),
        sample(
            "8",
            "INV-2024-008",
            "Michael Chang",
            "michael@chang-media.com",
            date(2024, 3, 10),
            date(2024, 4, 10),
            &[
                ("Video editing and post-production", 12.0, 150.0),
                ("Motion graphics and title sequences", 3.0, 400.0),
            ],
            InvoiceStatus::Paid,
        ),
        sample(
            "9",
            "INV-2024-009",
            "Rachel Green",
            "rachel@greenevents.co",
            date(2024, 3, 12),
            date(2024, 4, 12),
            &[
                ("Event branding and promotional materials", 1.0, 2200.0),
                ("Social media campaign management", 4.0, 350.0),
            ],
            InvoiceStatus::Overdue,
        ),
        sample(
            "10",
            "INV-2024-010",
            "Thomas Anderson",
            "t.anderson@matrixsys.com",
            date(2024, 3, 30),
            date(2024, 4, 30),
            &[
                ("Cybersecurity audit and vulnerability assessment", 1.0, 5500.0),
                ("Security policy documentation", 1.0, 1200.0),
            ],
            InvoiceStatus::Draft,
        ),
        sample(
            "11",
            "INV-2024-011",
            "Sophie Martinez",
            "sophie@artistry.design",
            date(2024, 3, 5),
            date(2024, 4, 5),
            &[
                ("Custom illustration package for children book", 15.0, 180.0),
                ("Character design and development", 5.0, 220.0),
            ],
            InvoiceStatus::Paid,
        ),
        sample(
            "12",
            "INV-2024-012",
            "Kevin O'Brien",
            "kevin@obrien-legal.ie",
            date(2024, 3, 8),
            date(2024, 4, 8),
            &[
                ("Legal website content writing and optimization", 1.0, 2800.0),
                ("Case study documentation and formatting", 8.0, 150.0),
            ],
            InvoiceStatus::Sent,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    number: &str,
    client_name: &str,
    client_email: &str,
    date: NaiveDate,
    due_date: NaiveDate,
    items: &[(&str, f64, f64)],
    status: InvoiceStatus,
) -> Invoice {
    let items: Vec<LineItem> = items
        .iter()
        .enumerate()
        .map(|(index, (description, quantity, rate))| LineItem {
            id: (index + 1).to_string(),
            description: description.to_string(),
            quantity: *quantity,
            rate: *rate,
            amount: calc::compute_amount(*quantity, *rate),
        })
        .collect();
    let totals = calc::compute_totals(&items, SAMPLE_TAX_RATE);
    Invoice {
        id: id.to_string(),
        invoice_number: number.to_string(),
        client_name: client_name.to_string(),
        client_email: client_email.to_string(),
        date,
        due_date,
        items,
        subtotal: totals.subtotal,
        tax_rate: SAMPLE_TAX_RATE,
        tax_amount: totals.tax_amount,
        total: totals.total,
        status,
        logo: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // static sample dates, always valid
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}
