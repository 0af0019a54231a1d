//! Interactive menu shell
//!
//! Reads user choices and drives the repository. The loop always comes back
//! to the menu; the only way out is the exit entry (or a broken terminal).

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use taquilla_core::{Repository, Status};

const MENU_ITEMS: [&str; 7] = [
    "Agregar ticket",
    "Listar tickets",
    "Buscar ticket",
    "Editar ticket",
    "Eliminar ticket",
    "Cambiar estado de ticket",
    "Salir",
];

/// Run the menu loop until the user exits.
pub fn run(repo: &mut Repository) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", "Menu de Gestion de Tickets".bold());

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Seleccione una opcion")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => create(repo, &theme)?,
            1 => list(repo),
            2 => show(repo, &theme)?,
            3 => edit(repo, &theme)?,
            4 => delete(repo, &theme)?,
            5 => change_status(repo, &theme)?,
            _ => {
                println!("Saliendo del programa.");
                return Ok(());
            }
        }
    }
}

fn create(repo: &mut Repository, theme: &ColorfulTheme) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Ingrese titulo del ticket")
        .allow_empty(true)
        .interact()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Ingrese descripcion del ticket")
        .allow_empty(true)
        .interact()?;

    let ticket = repo.create(title, description);
    println!("{} Ticket agregado: {}", "✓".green(), ticket.id.cyan());
    Ok(())
}

fn list(repo: &Repository) {
    let tickets = repo.list();
    if tickets.is_empty() {
        println!("No hay tickets disponibles.");
        return;
    }

    for ticket in tickets {
        println!("{ticket}");
        println!();
    }
}

fn show(repo: &Repository, theme: &ColorfulTheme) -> Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("ID del ticket a buscar")
        .interact()?;

    match repo.find(&id) {
        Some(ticket) => println!("{ticket}"),
        None => not_found(&id),
    }
    Ok(())
}

fn edit(repo: &mut Repository, theme: &ColorfulTheme) -> Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("ID del ticket a editar")
        .interact()?;

    let Some(current) = repo.find(&id) else {
        not_found(&id);
        return Ok(());
    };
    let current_title = current.title.clone();
    let current_description = current.description.clone();

    let title: String = Input::with_theme(theme)
        .with_prompt("Nuevo titulo")
        .default(current_title)
        .allow_empty(true)
        .interact()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Nueva descripcion")
        .default(current_description)
        .allow_empty(true)
        .interact()?;

    // Status is preserved unless the user asks to change it
    let status = if Confirm::with_theme(theme)
        .with_prompt("Cambiar tambien el estado?")
        .default(false)
        .interact()?
    {
        Some(prompt_status(theme)?)
    } else {
        None
    };

    repo.edit(&id, title, description, status);
    println!("{} Ticket editado.", "✓".green());
    Ok(())
}

fn delete(repo: &mut Repository, theme: &ColorfulTheme) -> Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("ID del ticket a eliminar")
        .interact()?;

    if repo.delete(&id) {
        println!("{} Ticket eliminado.", "✓".green());
    } else {
        not_found(&id);
    }
    Ok(())
}

fn change_status(repo: &mut Repository, theme: &ColorfulTheme) -> Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("ID del ticket para cambiar estado")
        .interact()?;
    let status = prompt_status(theme)?;

    if repo.set_status(&id, status) {
        println!("{} Estado actualizado: {}", "✓".green(), status);
    } else {
        not_found(&id);
    }
    Ok(())
}

fn prompt_status(theme: &ColorfulTheme) -> Result<Status> {
    let choice: String = Input::with_theme(theme)
        .with_prompt("Seleccione nuevo estado (1: Pendiente, 2: En Proceso, 3: Completado)")
        .interact()?;
    Ok(parse_status_choice(&choice))
}

/// Map raw menu input to a status. Non-numeric or out-of-range input falls
/// back to `Pendiente`.
fn parse_status_choice(input: &str) -> Status {
    Status::from_choice(input.trim().parse().unwrap_or(0))
}

fn not_found(id: &str) {
    println!("{} Ticket no encontrado: {}", "✗".red(), id);
}
