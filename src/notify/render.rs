//! Email document rendering for the two enquiry notifications.
//!
//! Optional fields are either omitted (their table row disappears) or
//! shown as an em-dash placeholder; rendering never fails on sparse
//! input.

use crate::labels::{budget_label, property_label, service_label, timeline_label};
use crate::lead::Lead;
use crate::notify::mailer::OutboundMail;
use crate::theme::Palette;

/// Placeholder for absent values that keep their row.
const PLACEHOLDER: &str = "&mdash;";

const COMPANY_NAME: &str = "V Infra Engineers";
const COMPANY_TAGLINE: &str = "THE UNDERGROUND FORCE";
const COMPANY_PHONE: &str = "+91 8080850001";
const COMPANY_LANDLINE: &str = "0120-4201391";
const COMPANY_EMAIL: &str = "info@vinfraengineers.com";
const COMPANY_ADDRESS: &str = "G28, Sector 3, Noida 201301";
const COMPANY_SITE: &str = "https://www.vinfraengineers.com";

fn scope_list(lead: &Lead) -> String {
    if lead.project_scope.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        lead.project_scope.join(", ")
    }
}

fn timeline_display(lead: &Lead) -> String {
    if lead.timeline.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        timeline_label(&lead.timeline).to_string()
    }
}

fn push_row(rows: &mut String, palette: &Palette, label: &str, value: &str) {
    rows.push_str(&format!(
        "<tr style=\"border-bottom:1px solid {border};\">\
         <td style=\"padding:10px 0;font-weight:600;width:180px;color:{primary};\">{label}</td>\
         <td style=\"padding:10px 0;\">{value}</td></tr>",
        border = palette.border,
        primary = palette.primary,
    ));
}

/// The operator notification sent to the fixed operational inbox.
pub fn admin_email(lead: &Lead, palette: &Palette) -> OutboundMail {
    let client_name = lead.client_name();
    let service = service_label(&lead.service_type);

    let mut rows = String::new();
    push_row(&mut rows, palette, "Reference", &lead.reference_number);
    push_row(&mut rows, palette, "Name", &client_name);
    push_row(
        &mut rows,
        palette,
        "Email",
        &format!(
            "<a href=\"mailto:{email}\" style=\"color:{primary};\">{email}</a>",
            email = lead.email,
            primary = palette.primary,
        ),
    );
    push_row(
        &mut rows,
        palette,
        "Phone",
        &format!(
            "<a href=\"tel:{phone}\" style=\"color:{primary};\">{phone}</a>",
            phone = lead.phone,
            primary = palette.primary,
        ),
    );
    if !lead.address.is_empty() {
        let full = if lead.city.is_empty() {
            lead.address.clone()
        } else {
            format!("{}, {}", lead.address, lead.city)
        };
        push_row(&mut rows, palette, "Address", &full);
    }
    push_row(&mut rows, palette, "Service Required", service);
    push_row(
        &mut rows,
        palette,
        "Property Type",
        property_label(&lead.property_type),
    );
    push_row(&mut rows, palette, "Project Scope", &scope_list(lead));
    push_row(&mut rows, palette, "Basement Levels", &lead.rooms.to_string());
    if !lead.square_footage.is_empty() {
        push_row(&mut rows, palette, "Area", &lead.square_footage);
    }
    push_row(&mut rows, palette, "Timeline", &timeline_display(lead));
    if !lead.budget.is_empty() {
        push_row(&mut rows, palette, "Budget", budget_label(&lead.budget));
    }
    if !lead.hear_about_us.is_empty() {
        push_row(&mut rows, palette, "Referral", &lead.hear_about_us);
    }

    let message_block = if lead.message.is_empty() {
        String::new()
    } else {
        format!(
            "<div style=\"margin-top:20px;padding:16px;background:{light_bg};border-radius:8px;border:1px solid {border};\">\
             <p style=\"margin:0 0 6px;font-weight:600;color:{primary};font-size:14px;\">Additional Message</p>\
             <p style=\"margin:0;color:{body};font-size:14px;line-height:1.6;\">{message}</p></div>",
            light_bg = palette.light_bg,
            border = palette.border,
            primary = palette.primary,
            body = palette.body,
            message = lead.message,
        )
    };

    let html = format!(
        "<div style=\"font-family:'Segoe UI',Arial,sans-serif;max-width:640px;margin:0 auto;background:#ffffff;border:1px solid {border};border-radius:12px;overflow:hidden;\">\
         <div style=\"background:{primary};padding:28px 32px;\">\
           <h1 style=\"margin:0;color:{secondary};font-size:22px;\">{COMPANY_NAME}</h1>\
           <p style=\"margin:4px 0 0;color:#ffffffcc;font-size:13px;\">New Project Enquiry Received</p>\
         </div>\
         <div style=\"padding:28px 32px;\">\
           <table style=\"width:100%;border-collapse:collapse;font-size:14px;color:{body};\">{rows}</table>\
           {message_block}\
         </div>\
         <div style=\"padding:20px 32px;background:{light_bg};border-top:1px solid {border};text-align:center;\">\
           <p style=\"margin:0;color:{muted};font-size:12px;\">This enquiry was submitted via the {COMPANY_NAME} website.</p>\
         </div></div>",
        border = palette.border,
        primary = palette.primary,
        secondary = palette.secondary,
        body = palette.body,
        light_bg = palette.light_bg,
        muted = palette.muted,
    );

    OutboundMail {
        from_name: "V Infra Website".to_string(),
        to: String::new(), // filled in by the dispatcher with the admin inbox
        subject: format!(
            "New Enquiry: {service} — {client_name} [{reference}]",
            reference = lead.reference_number,
        ),
        html,
    }
}

/// The confirmation sent to the submitter's own address.
pub fn confirmation_email(lead: &Lead, palette: &Palette) -> OutboundMail {
    let mut summary = String::new();
    push_row(
        &mut summary,
        palette,
        "Service",
        service_label(&lead.service_type),
    );
    push_row(
        &mut summary,
        palette,
        "Property",
        property_label(&lead.property_type),
    );
    push_row(&mut summary, palette, "Scope", &scope_list(lead));
    push_row(&mut summary, palette, "Timeline", &timeline_display(lead));

    let html = format!(
        "<div style=\"font-family:'Segoe UI',Arial,sans-serif;max-width:640px;margin:0 auto;background:#ffffff;border:1px solid {border};border-radius:12px;overflow:hidden;\">\
         <div style=\"background:{primary};padding:28px 32px;text-align:center;\">\
           <h1 style=\"margin:0;color:{secondary};font-size:24px;\">{COMPANY_NAME}</h1>\
           <p style=\"margin:6px 0 0;color:#ffffffcc;font-size:13px;letter-spacing:1px;\">{COMPANY_TAGLINE}</p>\
         </div>\
         <div style=\"padding:32px;\">\
           <h2 style=\"margin:0 0 8px;color:{primary};font-size:20px;\">Thank you, {first_name}!</h2>\
           <p style=\"color:{body};font-size:15px;line-height:1.7;margin:0 0 20px;\">\
             We have received your project enquiry and our engineering team will review it shortly. \
             <strong>We will contact you as soon as possible</strong> &mdash; typically within 24 hours.\
           </p>\
           <div style=\"background:{light_bg};border:1px solid {border};border-radius:8px;padding:20px;margin-bottom:24px;\">\
             <p style=\"margin:0 0 4px;color:{muted};font-size:12px;text-transform:uppercase;letter-spacing:0.5px;\">Your Reference Number</p>\
             <p style=\"margin:0;color:{primary};font-size:22px;font-weight:700;\">{reference}</p>\
           </div>\
           <table style=\"width:100%;border-collapse:collapse;font-size:14px;color:{body};margin-bottom:24px;\">{summary}</table>\
           <div style=\"border-top:1px solid {border};padding-top:20px;\">\
             <p style=\"margin:0 0 12px;color:{primary};font-weight:600;font-size:15px;\">Get in Touch Directly</p>\
             <p style=\"margin:0 0 6px;color:{body};font-size:14px;\">&#128222; <a href=\"tel:{phone}\" style=\"color:{primary};\">{phone}</a> &nbsp;|&nbsp; {landline}</p>\
             <p style=\"margin:0 0 6px;color:{body};font-size:14px;\">&#9993;&#65039; <a href=\"mailto:{company_email}\" style=\"color:{primary};\">{company_email}</a></p>\
             <p style=\"margin:0;color:{body};font-size:14px;\">&#128205; {company_address}</p>\
           </div>\
         </div>\
         <div style=\"padding:20px 32px;background:{primary};text-align:center;\">\
           <p style=\"margin:0 0 4px;color:{secondary};font-size:13px;font-weight:600;\">{COMPANY_NAME} Private Limited</p>\
           <p style=\"margin:0;color:#ffffff80;font-size:11px;\">Market Leader for Underground &amp; Deep Foundations</p>\
           <p style=\"margin:8px 0 0;color:#ffffff50;font-size:11px;\">\
             <a href=\"{site}\" style=\"color:#ffffff80;\">www.vinfraengineers.com</a>\
           </p>\
         </div></div>",
        border = palette.border,
        primary = palette.primary,
        secondary = palette.secondary,
        body = palette.body,
        light_bg = palette.light_bg,
        muted = palette.muted,
        first_name = lead.first_name,
        reference = lead.reference_number,
        phone = COMPANY_PHONE,
        landline = COMPANY_LANDLINE,
        company_email = COMPANY_EMAIL,
        company_address = COMPANY_ADDRESS,
        site = COMPANY_SITE,
    );

    OutboundMail {
        from_name: COMPANY_NAME.to_string(),
        to: lead.email.clone(),
        subject: format!(
            "We've received your enquiry — {} | {COMPANY_NAME}",
            lead.reference_number
        ),
        html,
    }
}
