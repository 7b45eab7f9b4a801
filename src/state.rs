use crate::{
    api::{HttpStudentApi, StudentApi},
    config::RuntimeConfiguration,
    controller::FormController,
    error::StudentFormResult,
};
use maud::{DOCTYPE, Markup, html};
use std::{ops::Deref, sync::Arc};

#[derive(Clone)]
pub struct StudentFormState {
    controller: Arc<FormController>,
    config: RuntimeConfiguration,
}

impl StudentFormState {
    pub fn new(config: RuntimeConfiguration) -> StudentFormResult<Self> {
        let api = HttpStudentApi::new(config.api_config().endpoint().clone())?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    pub fn with_api(config: RuntimeConfiguration, api: Arc<dyn StudentApi>) -> Self {
        let controller = FormController::new(api, config.message_hide_delay());

        Self {
            controller: Arc::new(controller),
            config,
        }
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Management" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    (markup)
                }
            }
        }
    }
}

impl Deref for StudentFormState {
    type Target = FormController;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}
