use maud::{Markup, Render, html};

pub fn render_table<const N: usize>(
    overall_title: &'static str,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (subtitle(overall_title))
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody id="student_table_body" {
                        @for row in items {
                            tr {
                                @for col in row {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-2" {(s)}
    }
}

pub fn simple_form_element(id: &'static str, label: &'static str) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input type="text" id=(id) name=(id) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        }
    }
}

pub fn form_submit_button(text: Option<&'static str>) -> Markup {
    html! {
        button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
            (text.unwrap_or("Submit"))
        }
    }
}

///a non-submitting button that posts the whole form somewhere else
pub fn form_action_button(
    text: &'static str,
    id: &'static str,
    post_to: &'static str,
    colour: &'static str,
) -> Markup {
    html! {
        button type="button" id=(id) hx-post=(post_to) hx-include="#student_form" hx-swap="none" class={(colour) " font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"} {
            (text)
        }
    }
}
