use leptos::prelude::*;

use super::SECTION_INFO;

#[component]
pub fn Info() -> impl IntoView {
    view! {
        <section id=SECTION_INFO class="section info">
            <div class="container">
                <h3 class="section-title">"活動資訊"</h3>
                <div class="section-rule section-rule-bright"></div>
                <div class="info-grid">
                    <div class="info-card">
                        <div class="info-icon">"📅"</div>
                        <h4 class="info-title">"活動時間"</h4>
                        <p>"2025年1月15日"</p>
                        <p>"週六下午 14:00-17:00"</p>
                        <p class="info-note">"（請提前15分鐘報到）"</p>
                    </div>
                    <div class="info-card">
                        <div class="info-icon">"📍"</div>
                        <h4 class="info-title">"活動地點"</h4>
                        <p>"台北市信義區"</p>
                        <p>"親子創意空間"</p>
                        <p class="info-note">"（捷運市政府站步行5分鐘）"</p>
                    </div>
                    <div class="info-card">
                        <div class="info-icon">"✍️"</div>
                        <h4 class="info-title">"報名方式"</h4>
                        <p>"線上報名表單"</p>
                        // presentational only, registration opens elsewhere
                        <button class="btn btn-register">"立即報名"</button>
                        <p class="info-note">"名額有限，額滿為止"</p>
                    </div>
                </div>
                <div class="info-contact">
                    <p class="info-contact-lead">"聯絡我們"</p>
                    <p>"📧 Email: kidsfashion@example.com"</p>
                    <p>"📱 電話: 02-1234-5678"</p>
                    <p>"📷 Instagram: @kidsfashionshow"</p>
                </div>
            </div>
        </section>
    }
}
