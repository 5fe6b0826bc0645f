use anyhow::anyhow;
use dialoguer::Input;
use studentdesk_auth::Session;
use studentdesk_client::ImageUpload;
use studentdesk_core::AppError;
use studentdesk_models::Student;
use tracing::{debug, instrument};

use super::commands::{HELP, ShellCommand, Target, parse_command};
use super::prompts::{confirm, edit_until_saved, login, print_notifications};
use super::render::{render_errors, render_list, render_student};
use crate::modules::auth::AuthService;
use crate::modules::students::{
    StudentForm, StudentListController, StudentService, SubmitOutcome,
};
use crate::state::AppState;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session over the student list.
pub struct Shell {
    state: AppState,
    session: Session,
    controller: StudentListController,
}

impl Shell {
    pub fn new(state: AppState, session: Session) -> Self {
        let controller = StudentListController::new(&state.config.list);
        Self {
            state,
            session,
            controller,
        }
    }

    pub fn controller(&self) -> &StudentListController {
        &self.controller
    }

    pub async fn run(&mut self) -> Result<(), AppError> {
        StudentService::refresh(&self.state, &mut self.controller).await;
        print_notifications(&self.state);
        self.print_list();
        println!("Type `help` for commands.");

        loop {
            let line = Input::<String>::new()
                .with_prompt("studentdesk")
                .allow_empty(true)
                .interact_text()?;

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };

            match self.execute(command).await {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => self.state.notifier.report(&err),
            }
            print_notifications(&self.state);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn execute(&mut self, command: ShellCommand) -> Result<Flow, AppError> {
        if !matches!(command, ShellCommand::Help | ShellCommand::Quit) {
            self.session.require()?;
        }

        match command {
            ShellCommand::Search(query) => {
                self.controller.on_search(query);
                self.print_list();
            }
            ShellCommand::Clear => {
                self.controller.on_search("");
                self.print_list();
            }
            ShellCommand::Sort(sort) => {
                self.controller.on_sort_change(sort);
                self.print_list();
            }
            ShellCommand::Page(page) => {
                let per_page = self.controller.pagination().items_per_page();
                self.controller.on_page_change(page, per_page);
                self.print_list();
            }
            ShellCommand::PerPage(per_page) => {
                if !self.state.config.list.is_option(per_page) {
                    self.state.notifier.warning(format!(
                        "Page size must be one of {:?}",
                        self.state.config.list.per_page_options
                    ));
                    return Ok(Flow::Continue);
                }
                let page = self.controller.pagination().current_page();
                self.controller.on_page_change(page, per_page);
                self.print_list();
            }
            ShellCommand::Next => {
                self.controller.next_page();
                self.print_list();
            }
            ShellCommand::Prev => {
                self.controller.prev_page();
                self.print_list();
            }
            ShellCommand::Show(target) => {
                let student = self.resolve(&target)?;
                let student = StudentService::get(&self.state, &student.id).await?;
                print!("{}", render_student(&student));
            }
            ShellCommand::Add => {
                let mut form = StudentForm::create();
                self.run_form(&mut form).await?;
            }
            ShellCommand::Edit(target) => {
                let student = self.resolve(&target)?;
                let mut form = StudentForm::edit(&student);
                self.run_form(&mut form).await?;
            }
            ShellCommand::Delete(target) => {
                let student = self.resolve(&target)?;
                let prompt = format!("Delete {} ({})?", student.name, student.email);
                if confirm(&prompt, false)? {
                    StudentService::remove(&self.state, &mut self.controller, &student.id).await?;
                    self.print_list();
                }
            }
            ShellCommand::Avatar(target, path) => {
                let student = self.resolve(&target)?;
                let image = ImageUpload::from_path(&path)
                    .await
                    .map_err(crate::utils::errors::service_error)?;
                self.replace_avatar(&student, &image).await?;
            }
            ShellCommand::Reload => {
                StudentService::refresh(&self.state, &mut self.controller).await;
                self.print_list();
            }
            ShellCommand::Logout => {
                AuthService::logout(&self.state, &mut self.session);
                print_notifications(&self.state);
                login(&self.state, &mut self.session, None, None).await?;
                self.print_list();
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn run_form(&mut self, form: &mut StudentForm) -> Result<(), AppError> {
        let existing = self.controller.records().to_vec();
        if edit_until_saved(&self.state, form, &existing).await?.is_some() {
            StudentService::refresh(&self.state, &mut self.controller).await;
            self.print_list();
        }
        Ok(())
    }

    /// Uploads `image` and saves the record with the new URL.
    async fn replace_avatar(
        &mut self,
        student: &Student,
        image: &ImageUpload,
    ) -> Result<(), AppError> {
        let mut form = StudentForm::edit(student);
        form.attach_avatar(&self.state, image).await?;
        debug!(id = %student.id, "Saving new avatar");
        if let SubmitOutcome::Invalid(result) = form.submit(&self.state).await? {
            print!("{}", render_errors(&result));
            return Err(AppError::bad_request(anyhow!(
                "Stored record for {} is invalid; edit it before replacing the avatar",
                student.name
            )));
        }
        StudentService::refresh(&self.state, &mut self.controller).await;
        Ok(())
    }

    fn resolve(&self, target: &Target) -> Result<Student, AppError> {
        let found = match target {
            Target::Position(position) => self.controller.at_position(*position),
            Target::Id(id) => self.controller.find(id),
        };
        found
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow!("No student at {}", target)))
    }

    fn print_list(&self) {
        print!(
            "{}",
            render_list(
                &self.controller.view(),
                &self.state.config.list.per_page_options
            )
        );
    }
}
