//! About section: static bio, skills and social links.

use leptos::prelude::*;

use crate::content::{BIO, SKILLS, SOCIALS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About"</h2>
            <div class="about__layout">
                <div class="about__bio">
                    {BIO.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                    <ul class="about__socials">
                        {SOCIALS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.url target="_blank" rel="noopener noreferrer">
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="about__skills">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-group">
                                    <h3 class="skill-group__title">{group.title}</h3>
                                    <ul class="skill-group__items">
                                        {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
