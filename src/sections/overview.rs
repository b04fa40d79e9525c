use leptos::prelude::*;

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <section class="section section-light">
            <div class="container">
                <h3 class="section-title">"活動簡介"</h3>
                <div class="section-rule"></div>
                <div class="overview-grid">
                    <div class="overview-card">
                        <h4 class="overview-title">"🎭 活動內容"</h4>
                        <ul class="overview-list">
                            <li>"專業攝影記錄每個精彩瞬間"</li>
                            <li>"溫馨舞台讓孩子自信走秀"</li>
                            <li>"親子互動遊戲與體驗活動"</li>
                            <li>"專業造型師提供造型建議"</li>
                        </ul>
                    </div>
                    <div class="overview-card">
                        <h4 class="overview-title">"👶 參加對象"</h4>
                        <ul class="overview-list">
                            <li>"2-6歲幼兒及其家長"</li>
                            <li>"歡迎所有喜愛時尚的小朋友"</li>
                            <li>"無需任何經驗，只需要一顆勇敢的心"</li>
                            <li>"家長全程陪同參與"</li>
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
