//! The interactive session: menu loop, form handlers and wiring between
//! prompts and the API facade. This is the only layer that touches the
//! terminal.

use clientele::api::Crm;
use clientele::error::{CrmError, Result};
use clientele::persist::fs::FileBackend;
use clientele::store::CustomerUpdate;
use clientele::validate;
use colored::Colorize;

mod prompt;
mod render;

pub fn run() -> Result<()> {
    let (mut crm, opened) = Crm::open(FileBackend::new());

    println!();
    println!("  {}", "CLIENTELE — customer records".bold());
    render::print_messages(&opened.messages);

    loop {
        print_menu();
        let choice = match prompt::read_line("  Choose an option: ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => handle_create(&mut crm)?,
            "2" => handle_list(&crm),
            "3" => handle_search(&crm)?,
            "4" => handle_update(&mut crm)?,
            "5" => handle_delete(&mut crm)?,
            "6" => handle_statistics(&crm),
            "0" => break,
            _ => println!("  [!] Invalid option, enter a number from 0 to 6."),
        }
    }

    println!();
    println!("  {}", "Goodbye.".dimmed());
    Ok(())
}

fn print_menu() {
    println!();
    println!("  {}", "MAIN MENU".bold());
    println!("  1. New customer");
    println!("  2. List customers");
    println!("  3. Search customers");
    println!("  4. Update customer");
    println!("  5. Delete customer");
    println!("  6. Statistics");
    println!("  0. Exit");
}

fn handle_create(crm: &mut Crm<FileBackend>) -> Result<()> {
    println!();
    println!("  {}", "FORM: NEW CUSTOMER".bold());

    let name = prompt::required("Full name", validate::valid_name, "The name cannot be empty.")?;
    let email = prompt::required("Email", validate::valid_email, "The email must contain '@'.")?;
    let phone = prompt::required(
        "Phone (min 9 characters)",
        validate::valid_phone,
        "The phone must have at least 9 characters.",
    )?;
    let company = prompt::optional("Company (leave blank if none)")?.unwrap_or_default();
    let category = prompt::category()?;

    let result = crm.create(name, email, phone, company, category);
    println!();
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_list(crm: &Crm<FileBackend>) {
    println!();
    let result = crm.list();
    if result.listed.is_empty() {
        println!("  {}", "No customers registered.".dimmed());
        return;
    }
    render::print_table(&result.listed);
}

fn handle_search(crm: &Crm<FileBackend>) -> Result<()> {
    println!();
    let term = prompt::required(
        "Text to search (name or email)",
        validate::valid_query,
        "You must type something to search for.",
    )?;

    let result = crm.search(&term)?;
    render::print_messages(&result.messages);
    if !result.listed.is_empty() {
        render::print_table(&result.listed);
    }
    Ok(())
}

fn handle_update(crm: &mut Crm<FileBackend>) -> Result<()> {
    println!();
    println!("  {}", "FORM: UPDATE CUSTOMER".bold());

    let id = prompt::id("Id of the customer to update")?;
    let current = match crm.find(id) {
        Some(customer) => customer,
        None => {
            println!("  [!] No customer with id {}.", id);
            return Ok(());
        }
    };

    println!("  Current values:");
    render::print_record(&current);
    println!();
    println!("  (Leave blank to keep the current value)");

    let name = prompt::optional(&format!("New name [{}]", current.name))?;
    let email = prompt::optional(&format!("New email [{}]", current.email))?;
    let phone = prompt::optional(&format!("New phone [{}]", current.phone))?;
    let company = prompt::optional(&format!("New company [{}]", current.company))?;
    println!("  New category [{}]:", current.category);
    let category = prompt::category()?;

    let changes = CustomerUpdate {
        name,
        email,
        phone,
        company,
        category,
    };

    match crm.update(id, changes) {
        Ok(result) => {
            println!();
            render::print_messages(&result.messages);
        }
        Err(CrmError::CustomerNotFound(id)) => println!("  [!] No customer with id {}.", id),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn handle_delete(crm: &mut Crm<FileBackend>) -> Result<()> {
    println!();
    let id = prompt::id("Id of the customer to delete")?;
    let customer = match crm.find(id) {
        Some(customer) => customer,
        None => {
            println!("  [!] No customer with id {}.", id);
            return Ok(());
        }
    };

    println!("  Customer found:");
    render::print_record(&customer);
    println!();

    if !prompt::confirm("Confirm deletion?")? {
        println!("  {}", "Deletion cancelled.".dimmed());
        return Ok(());
    }

    match crm.delete(id) {
        Ok(result) => render::print_messages(&result.messages),
        Err(CrmError::CustomerNotFound(id)) => println!("  [!] No customer with id {}.", id),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn handle_statistics(crm: &Crm<FileBackend>) {
    println!();
    println!("  {}", "STATISTICS".bold());
    let result = crm.statistics();
    if let Some(stats) = &result.statistics {
        render::print_statistics(stats);
    }
}
