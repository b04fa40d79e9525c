use leptos::prelude::*;

use super::SECTION_ABOUT;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SECTION_ABOUT class="section section-light">
            <div class="container">
                <h3 class="section-title">"專案理念"</h3>
                <div class="section-rule"></div>
                <div class="about-copy">
                    <p class="about-lead">
                        "我們相信每個孩子都擁有獨特的美感與創造力。幼兒快閃時裝秀不僅是一場展示，"
                        "更是一個讓孩子們自信表達、勇敢展現自我的舞台。"
                    </p>
                    <p>
                        "透過時尚與藝術的結合，我們希望培養孩子的美學素養、自信心與表達能力，"
                        "讓他們在快樂中成長，在展示中學習。"
                    </p>
                </div>
            </div>
        </section>
    }
}
