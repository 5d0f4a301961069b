use super::{escape_html, with_layout, Icon};
use crate::fmt::{money, short_date};
use crate::models::Bill;

fn row(bill: &Bill) -> String {
    format!(
        "<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n\
         <td><div class=\"icon-actions\"><div id=\"eye\" data-testid=\"icon-eye\" data-bill-url=\"{}\">voir</div></div></td>\n</tr>",
        escape_html(bill.expense_type.label()),
        escape_html(&bill.name),
        short_date(bill.date),
        money(bill.amount),
        bill.status.label(),
        escape_html(&bill.file_url)
    )
}

/// The employee's bills, newest first as given.
pub fn bills_ui(bills: &[Bill]) -> String {
    let rows: Vec<String> = bills.iter().map(row).collect();
    let body = format!(
        "<div class=\"content-inner\">\n\
         <button type=\"button\" data-testid=\"btn-new-bill\" class=\"btn btn-primary\">Nouvelle note de frais</button>\n\
         <div id=\"data-table\">\n<table id=\"example\" class=\"table table-striped\" style=\"width:100%\">\n\
         <thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead>\n\
         <tbody data-testid=\"tbody\">\n{}\n</tbody>\n</table>\n</div>\n</div>",
        rows.join("\n")
    );
    with_layout(Icon::Window, "Mes notes de frais", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillStatus, ExpenseType};
    use crate::views::screen;
    use crate::views::layout::ACTIVE_CLASS;
    use chrono::NaiveDate;

    fn bill(name: &str) -> Bill {
        Bill {
            id: 1,
            key: "1234".to_string(),
            email: "a@a".to_string(),
            expense_type: ExpenseType::Restaurants,
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2004, 4, 4).unwrap(),
            amount: 400.0,
            vat: 80.0,
            pct: 20,
            commentary: None,
            file_url: "https://localhost:3456/images/test.jpg".to_string(),
            file_name: "test.jpg".to_string(),
            status: BillStatus::Pending,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_bills_rows_are_rendered() {
        let html = bills_ui(&[bill("encore"), bill("<script>")]);
        assert_eq!(screen::query_all_by_test_id(&html, "icon-eye").len(), 2);
        assert!(html.contains("<td>4 Avr. 04</td>"));
        assert!(html.contains("<td>400,00 €</td>"));
        assert!(html.contains("<td>En attente</td>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_window_icon_is_active() {
        let html = bills_ui(&[]);
        assert!(screen::get_by_test_id(&html, "icon-window").has_class(ACTIVE_CLASS));
        assert!(!screen::get_by_test_id(&html, "icon-mail").has_class(ACTIVE_CLASS));
        screen::get_by_test_id(&html, "tbody");
    }
}
