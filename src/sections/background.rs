use leptos::prelude::*;

use super::SECTION_BACKGROUND;

#[component]
pub fn Background() -> impl IntoView {
    view! {
        <section id=SECTION_BACKGROUND class="section">
            <div class="container">
                <h3 class="section-title">"專案背景"</h3>
                <div class="section-rule"></div>
                <div class="features-grid">
                    <FeatureCard
                        title="美感教育"
                        content="在快速變化的時代，美感教育成為幼兒全人發展的重要一環。我們透過時裝展示，讓孩子從小接觸藝術與美學。"
                        delay="0s"
                    />
                    <FeatureCard
                        title="自信培養"
                        content="許多孩子在成長過程中缺乏展示自我的機會。我們提供一個安全、溫馨的舞台，讓每個孩子都能勇敢表現。"
                        delay="0.1s"
                    />
                    <FeatureCard
                        title="親子共創"
                        content="時裝秀不只是孩子的舞台，更是親子共同參與、創造美好回憶的機會，增進家庭情感連結。"
                        delay="0.2s"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    title: &'static str,
    content: &'static str,
    delay: &'static str,
) -> impl IntoView {
    let stagger = format!("animation-delay: {delay};");

    view! {
        <div class="feature-card" style=stagger>
            <h4 class="feature-title">{title}</h4>
            <div class="feature-rule"></div>
            <p class="feature-copy">{content}</p>
        </div>
    }
}
