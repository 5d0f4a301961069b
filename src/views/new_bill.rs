use super::{escape_html, with_layout, Icon};
use crate::form::{Field, NewBillForm};
use crate::models::ExpenseType;

fn value_attr(form: &NewBillForm, field: Field) -> String {
    let value = form.value(field);
    if value.is_empty() {
        String::new()
    } else {
        format!(" value=\"{}\"", escape_html(value))
    }
}

fn expense_type_options(selected: &str) -> String {
    ExpenseType::ALL
        .into_iter()
        .map(|t| {
            let label = escape_html(t.label());
            if t.label() == selected {
                format!("<option selected>{label}</option>")
            } else {
                format!("<option>{label}</option>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The new-bill form reflecting the current values of `form`.
pub fn render_new_bill(form: &NewBillForm) -> String {
    let body = format!(
        r#"<div class="form-newbill-container content-inner">
<form data-testid="form-new-bill">
<div class="row">
<div class="col-md-6">
<div class="col-half">
<label for="expense-type" class="bold-label">Type de dépense</label>
<select required class="form-control blue-border" data-testid="expense-type">
{options}
</select>
</div>
<div class="col-half">
<label for="expense-name" class="bold-label">Nom de la dépense</label>
<input type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres"{name}>
</div>
<div class="col-half">
<label for="datepicker" class="bold-label">Date</label>
<input required type="date" class="form-control blue-border" data-testid="datepicker"{date}>
</div>
<div class="col-half">
<label for="amount" class="bold-label">Montant TTC</label>
<input required type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348"{amount}>
</div>
<div class="col-half-row">
<div class="flex-col">
<label for="vat" class="bold-label">TVA</label>
<input type="number" class="form-control blue-border" data-testid="vat" placeholder="70"{vat}>
</div>
<div class="flex-col">
<input required type="number" class="form-control blue-border" data-testid="pct" placeholder="20"{pct}>
</div>
</div>
</div>
<div class="col-md-6">
<div class="col-half">
<label for="commentary" class="bold-label">Commentaire</label>
<textarea class="form-control blue-border" data-testid="commentary" rows="3">{commentary}</textarea>
</div>
<div class="col-half">
<label for="file" class="bold-label">Justificatif</label>
<input required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file"{file}>
</div>
</div>
</div>
<div class="row">
<div class="col-md-6">
<div class="col-half">
<button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
</div>
</div>
</div>
</form>
</div>"#,
        options = expense_type_options(form.value(Field::ExpenseType)),
        name = value_attr(form, Field::ExpenseName),
        date = value_attr(form, Field::Datepicker),
        amount = value_attr(form, Field::Amount),
        vat = value_attr(form, Field::Vat),
        pct = value_attr(form, Field::Pct),
        commentary = escape_html(form.value(Field::Commentary)),
        file = if form.file.value.is_empty() {
            String::new()
        } else {
            format!(" value=\"{}\"", escape_html(&form.file.value))
        },
    );
    with_layout(Icon::Mail, "Envoyer une note de frais", &body)
}

/// The page as it first renders, every input empty.
pub fn new_bill_ui() -> String {
    render_new_bill(&NewBillForm::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::screen;

    #[test]
    fn test_form_is_displayed() {
        let html = new_bill_ui();
        let form = screen::get_by_test_id(&html, "form-new-bill");
        assert_eq!(form.tag, "form");
    }

    #[test]
    fn test_every_input_is_addressable() {
        let html = new_bill_ui();
        for id in [
            "file", "expense-type", "expense-name", "amount", "datepicker", "vat", "pct", "commentary", "icon-mail",
        ] {
            screen::get_by_test_id(&html, id);
        }
        assert_eq!(screen::get_by_test_id(&html, "file").attr("type"), Some("file"));
        assert_eq!(screen::get_by_test_id(&html, "expense-type").tag, "select");
        assert_eq!(screen::get_by_test_id(&html, "commentary").tag, "textarea");
    }

    #[test]
    fn test_renders_current_values_escaped() {
        let mut form = NewBillForm::default();
        form.set(Field::ExpenseType, "Hôtel et logement");
        form.set(Field::ExpenseName, "Dîner \"client\"");
        form.set(Field::Amount, "400");
        form.set(Field::Commentary, "<b>en fait non</b>");
        let html = render_new_bill(&form);

        assert!(html.contains("<option selected>Hôtel et logement</option>"));
        assert_eq!(
            screen::get_by_test_id(&html, "expense-name").attr("value"),
            Some("Dîner &quot;client&quot;")
        );
        assert_eq!(screen::get_by_test_id(&html, "amount").attr("value"), Some("400"));
        assert!(html.contains("&lt;b&gt;en fait non&lt;/b&gt;</textarea>"));
        assert!(screen::get_by_test_id(&html, "vat").attr("value").is_none());
    }
}
