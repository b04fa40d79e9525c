use leptos::prelude::*;

use super::SECTION_VISION;

#[component]
pub fn Vision() -> impl IntoView {
    view! {
        <section id=SECTION_VISION class="section section-warm">
            <div class="container">
                <h3 class="section-title">"專案願景"</h3>
                <div class="section-rule"></div>
                <div class="vision-card">
                    <VisionPoint
                        number="1"
                        title="建立自信平台"
                        body="打造一個讓每個孩子都能自信展現的舞台，不論性格內向或外向，都能找到屬於自己的閃耀方式。"
                    />
                    <VisionPoint
                        number="2"
                        title="推廣美感教育"
                        body="將時尚與藝術融入幼兒教育，培養孩子的審美能力、創造力與表達力，為未來奠定基礎。"
                    />
                    <VisionPoint
                        number="3"
                        title="創造美好回憶"
                        body="為家庭創造珍貴的共同回憶，讓這場時裝秀成為孩子成長歷程中難忘的里程碑。"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn VisionPoint(
    number: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="vision-point">
            <div class="vision-num">{number}</div>
            <div>
                <h4 class="vision-point-title">{title}</h4>
                <p>{body}</p>
            </div>
        </div>
    }
}
