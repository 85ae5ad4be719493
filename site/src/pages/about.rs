use leptos::prelude::*;

/// Mission statement and values.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="page page--narrow">
            <section class="prose">
                <p>
                    "Le Cercle Emir Abdelkader est une plateforme unique dédiée au renforcement des relations franco-algériennes. Nommé en l’honneur d’Emir Abdelkader, figure emblématique de la résistance algérienne au XIXe siècle et symbole de la fraternité entre les peuples, notre cercle incarne les valeurs de dialogue, de respect mutuel et de coopération."
                </p>
                <h2>"Notre mission"</h2>
                <p>"Nous sommes engagés à promouvoir un partenariat fort et durable entre la France et l’Algérie."</p>
                <p>"Notre mission s’articule autour de trois axes principaux :"</p>
                <h3>"Dialogue politique et économique"</h3>
                <p>
                    "Encourager le dialogue politique et économique est au cœur de notre action. Nous organisons des conférences et des tables rondes avec des personnalités influentes des deux pays, abordant des sujets allant de la diplomatie à la croissance économique, en passant par les innovations technologiques."
                </p>
                <h3>"Soutien aux initiatives de paix et de coopération"</h3>
                <p>
                    "Inspirés par l’esprit d’Emir Abdelkader, qui fut un médiateur et un homme de paix, nous soutenons activement les initiatives qui œuvrent pour la paix et la compréhension mutuelle."
                </p>
                <h3>"Renforcement des liens culturels"</h3>
                <p>
                    "La France et l’Algérie partagent une histoire riche et complexe. Du riche patrimoine architectural de la Casbah d’Alger aux galeries d’art contemporain de Paris, nos cultures s’entrelacent. Nous célébrons cette histoire commune à travers la promotion des événements culturels, des expositions et des échanges éducatifs."
                </p>
                <h2>"Nos valeurs"</h2>
                <p>
                    "Nos valeurs s’ancrent dans le respect, l’échange et la connaissance mutuelle. Elles sont le reflet de personnalités historiques marquantes telles qu’Emir Abdelkader, connu pour sa sagesse et son respect de l’autre et de figures françaises telles que Victor Hugo qui admirait profondément la culture et l’histoire algériennes."
                </p>
            </section>
        </main>
    }
}
